//! 設定ファイルテスト

use ai_image_detector::config::Config;
use tempfile::tempdir;

/// 設定ファイルがなければデフォルト
#[test]
fn test_load_missing_file_is_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");
    assert_eq!(config, Config::default());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config
        .set_endpoint("http://localhost:8000/predict")
        .expect("設定失敗");
    config.timeout_seconds = 30;
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.endpoint.as_deref(), Some("http://localhost:8000/predict"));
    assert_eq!(loaded.timeout_seconds, 30);

    let endpoint = loaded.resolve_endpoint_with(None, None).expect("解決失敗");
    assert_eq!(endpoint.as_str(), "http://localhost:8000/predict");
}
