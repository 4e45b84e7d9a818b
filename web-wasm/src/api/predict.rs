//! 推論エンドポイントへの画像送信（fetch + FormData）

use detector_common::{
    parse_prediction_response, SubmissionResult, UNEXPECTED_RESPONSE_MESSAGE, UNREACHABLE_MESSAGE,
    UPLOAD_FIELD,
};
use gloo::console;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// 失敗の種類
enum FetchError {
    /// レスポンスが返ってこなかった
    Network(JsValue),
    /// 本文を読めなかった
    Body(JsValue),
}

/// 画像を送信して判定結果を返す
///
/// 失敗はすべて `SubmissionResult::Error` に変換され、呼び出し側には伝播しない。
pub async fn submit_image(endpoint: &str, file: &File) -> SubmissionResult {
    match post_image(endpoint, file).await {
        Ok(result) => result,
        Err(FetchError::Network(err)) => {
            console::error!("prediction request failed", err);
            SubmissionResult::error(UNREACHABLE_MESSAGE)
        }
        Err(FetchError::Body(err)) => {
            console::error!("could not read prediction response", err);
            SubmissionResult::error(UNEXPECTED_RESPONSE_MESSAGE)
        }
    }
}

async fn post_image(endpoint: &str, file: &File) -> Result<SubmissionResult, FetchError> {
    let form = FormData::new().map_err(FetchError::Network)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(FetchError::Network)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(FetchError::Network)?;

    let window = web_sys::window().ok_or_else(|| FetchError::Network(JsValue::from_str("no window")))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(FetchError::Network)?;
    let resp: Response = resp_value.dyn_into().map_err(FetchError::Body)?;

    let text_promise = resp.text().map_err(FetchError::Body)?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(FetchError::Body)?
        .as_string()
        .unwrap_or_default();

    Ok(parse_prediction_response(resp.status(), &body))
}
