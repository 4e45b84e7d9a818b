use crate::error::{DetectorError, Result};
use detector_common::{Endpoint, ENDPOINT_ENV_VAR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: 120, // 無料ホスティングのコールドスタートを待てる長さ
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DetectorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("ai-image-detector").join("config.json"))
    }

    /// エンドポイントを決定
    ///
    /// 優先順: コマンドライン > 環境変数 > 設定ファイル > デフォルト
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> Result<Endpoint> {
        let env = std::env::var(ENDPOINT_ENV_VAR).ok();
        self.resolve_endpoint_with(flag, env.as_deref())
    }

    pub fn resolve_endpoint_with(&self, flag: Option<&str>, env: Option<&str>) -> Result<Endpoint> {
        Ok(Endpoint::resolve([flag, env, self.endpoint.as_deref()])?)
    }

    /// 検証してから設定する（保存は呼び出し側）
    pub fn set_endpoint(&mut self, raw: &str) -> Result<()> {
        let endpoint = Endpoint::parse(raw)?;
        self.endpoint = Some(endpoint.to_string());
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detector_common::DEFAULT_ENDPOINT;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.endpoint.is_none());
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_resolve_priority() {
        let config = Config {
            endpoint: Some("https://file.example.com/predict".into()),
            ..Default::default()
        };

        let from_flag = config
            .resolve_endpoint_with(Some("https://flag.example.com/predict"), Some("https://env.example.com/predict"))
            .expect("解決失敗");
        assert_eq!(from_flag.as_str(), "https://flag.example.com/predict");

        let from_env = config
            .resolve_endpoint_with(None, Some("https://env.example.com/predict"))
            .expect("解決失敗");
        assert_eq!(from_env.as_str(), "https://env.example.com/predict");

        let from_file = config.resolve_endpoint_with(None, None).expect("解決失敗");
        assert_eq!(from_file.as_str(), "https://file.example.com/predict");
    }

    #[test]
    fn test_resolve_default() {
        let endpoint = Config::default()
            .resolve_endpoint_with(None, None)
            .expect("解決失敗");
        assert_eq!(endpoint.as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_set_endpoint_rejects_invalid() {
        let mut config = Config::default();
        let err = config.set_endpoint("not-a-url").unwrap_err();
        assert!(matches!(err, DetectorError::Common(_)));
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_timeout_never_zero() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout().as_secs(), 1);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"endpoint":"http://localhost:8000/predict"}"#)
            .expect("パース失敗");
        assert_eq!(config.timeout_seconds, 120);
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8000/predict"));
    }
}
