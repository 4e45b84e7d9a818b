//! 推論エンドポイント設定
//!
//! エンドポイントは呼び出し側にハードコードせず、
//! WASMはmetaタグ、CLIはフラグ・環境変数・設定ファイルから注入する。

use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://ai-image-detector-backend4.onrender.com/predict";

/// multipartで画像を載せるフィールド名
pub const UPLOAD_FIELD: &str = "file";

pub const ENDPOINT_ENV_VAR: &str = "DETECTOR_ENDPOINT";

/// 検証済みのエンドポイント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    /// http/httpsの絶対URLのみ受け付ける
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let url = Url::parse(trimmed)
            .map_err(|e| Error::InvalidEndpoint(format!("{} ({})", trimmed, e)))?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(Self { url: url.into() }),
            _ => Err(Error::InvalidEndpoint(trimmed.to_string())),
        }
    }

    /// 優先順に候補を見て、最初に空でない値を採用する
    ///
    /// 候補がすべて空ならデフォルト。採用した値が不正ならエラー。
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Result<Self> {
        let chosen = candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        Self::parse(chosen)
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// サービスのルート（ヘルスチェック用）
    pub fn health_url(&self) -> Result<String> {
        let mut root =
            Url::parse(&self.url).map_err(|e| Error::InvalidEndpoint(e.to_string()))?;
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);
        Ok(root.into())
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

impl std::str::FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
