//! ブラウザ上でのみ動くテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行する

#![cfg(target_arch = "wasm32")]

use detector_common::{SelectOutcome, UploadWidget, UNREACHABLE_MESSAGE};
use detector_wasm::api::submit_image;
use detector_wasm::config::Variant;
use detector_wasm::preview::ObjectUrl;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{File, FilePropertyBag};

wasm_bindgen_test_configure!(run_in_browser);

fn make_file(name: &str, mime_type: &str) -> File {
    let parts = js_sys::Array::of1(&JsValue::from_str("fake image bytes"));
    let options = FilePropertyBag::new();
    options.set_type(mime_type);
    File::new_with_str_sequence_and_options(&parts, name, &options).expect("File生成失敗")
}

#[wasm_bindgen_test]
fn object_url_is_blob_url() {
    let file = make_file("cat.png", "image/png");
    let url = ObjectUrl::for_file(&file).expect("プレビュー生成失敗");
    assert!(url.as_str().starts_with("blob:"));
}

#[wasm_bindgen_test]
fn widget_accepts_browser_image_file() {
    let mut widget: UploadWidget<File, ObjectUrl> = UploadWidget::new();
    let file = make_file("cat.png", "image/png");
    let declared_type = file.type_();

    let outcome = widget.select(&declared_type, file, ObjectUrl::for_file);

    assert_eq!(outcome, SelectOutcome::Accepted);
    assert!(widget.preview().is_some());
}

#[wasm_bindgen_test]
fn widget_ignores_browser_text_file() {
    let mut widget: UploadWidget<File, ObjectUrl> = UploadWidget::new();
    let file = make_file("notes.txt", "text/plain");
    let declared_type = file.type_();

    let outcome = widget.select(&declared_type, file, ObjectUrl::for_file);

    assert_eq!(outcome, SelectOutcome::NotAnImage);
    assert!(!widget.has_file());
}

#[wasm_bindgen_test]
fn default_variant_without_meta_is_minimal() {
    assert_eq!(Variant::parse(None), Variant::Minimal);
}

#[wasm_bindgen_test]
async fn submit_to_unreachable_service_is_inline_error() {
    let file = make_file("cat.png", "image/png");

    let result = submit_image("http://127.0.0.1:1/predict", &file).await;

    assert!(result.is_error());
    assert_eq!(result.error_message(), Some(UNREACHABLE_MESSAGE));
}

#[wasm_bindgen_test]
async fn submit_to_invalid_url_is_inline_error() {
    let file = make_file("cat.png", "image/png");

    let result = submit_image("http://[::1", &file).await;

    assert_eq!(result.error_message(), Some(UNREACHABLE_MESSAGE));
}
