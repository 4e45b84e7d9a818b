//! 推論サービスのレスポンスパーサー
//!
//! ブラウザ(fetch)とCLI(reqwest)の両方から、
//! ステータスコードとレスポンス本文を受け取ってSubmissionResultに変換する

use serde_json::{Map, Value};

use crate::types::SubmissionResult;

pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from the prediction service";
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the prediction service";

/// レスポンスをパース
///
/// 判定順:
/// 1. JSONでなければエラー
/// 2. `error` キーがあればそのメッセージ（ステータスに関係なく）
/// 3. `detail` キー（FastAPIのバリデーションエラー形式）
/// 4. 2xx以外のステータス
/// 5. `prediction` + `confidence`
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンス本文
///
/// # Examples
/// ```
/// use detector_common::parse_prediction_response;
///
/// let result = parse_prediction_response(200, r#"{"prediction":"Real","confidence":87}"#);
/// assert_eq!(result.as_prediction().unwrap().label, "Real");
/// ```
pub fn parse_prediction_response(status: u16, body: &str) -> SubmissionResult {
    let value: Value = match serde_json::from_str(body.trim()) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("prediction response is not JSON: {}", e);
            return if is_success(status) {
                SubmissionResult::error(UNEXPECTED_RESPONSE_MESSAGE)
            } else {
                status_error(status)
            };
        }
    };

    let Some(map) = value.as_object() else {
        return SubmissionResult::error(UNEXPECTED_RESPONSE_MESSAGE);
    };

    if let Some(message) = get_string(map, "error") {
        return SubmissionResult::error(message);
    }

    if let Some(detail) = map.get("detail").and_then(detail_message) {
        return SubmissionResult::error(detail);
    }

    if !is_success(status) {
        return status_error(status);
    }

    let label = get_string(map, "prediction");
    let confidence = map.get("confidence").and_then(get_number);

    match (label, confidence) {
        (Some(label), Some(confidence)) if confidence.is_finite() => {
            SubmissionResult::prediction(label, confidence)
        }
        _ => SubmissionResult::error(UNEXPECTED_RESPONSE_MESSAGE),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn status_error(status: u16) -> SubmissionResult {
    SubmissionResult::error(format!("Prediction service returned status {}", status))
}

fn get_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)?.as_str().map(|s| s.to_string())
}

/// 数値または数値文字列を受け付ける
fn get_number(value: &Value) -> Option<f64> {
    if let Some(n) = value.as_f64() {
        return Some(n);
    }
    value.as_str()?.trim().trim_end_matches('%').parse().ok()
}

/// FastAPIの `detail` は文字列か `[{"msg": ...}]` のどちらか
fn detail_message(detail: &Value) -> Option<String> {
    if let Some(s) = detail.as_str() {
        return Some(s.to_string());
    }
    let messages: Vec<&str> = detail
        .as_array()?
        .iter()
        .filter_map(|item| item.get("msg").and_then(Value::as_str))
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}
