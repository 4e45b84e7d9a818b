//! ホストページからの設定読み込み
//!
//! ```html
//! <meta name="detector-endpoint" content="https://example.com/predict">
//! <meta name="detector-variant" content="landing">
//! ```

use detector_common::Endpoint;
use gloo::console;
use leptos::prelude::document;

pub const ENDPOINT_META: &str = "detector-endpoint";
pub const VARIANT_META: &str = "detector-variant";

/// ページの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// フォームだけのシンプルな画面
    #[default]
    Minimal,
    /// ナビゲーション付きのランディングページ
    Landing,
}

impl Variant {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("landing") | Some("full") => Variant::Landing,
            _ => Variant::Minimal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub endpoint: Endpoint,
    pub variant: Variant,
}

impl WebConfig {
    /// metaタグ > ビルド時の `DETECTOR_ENDPOINT` > デフォルト
    pub fn from_document() -> Self {
        let meta_endpoint = meta_content(ENDPOINT_META);
        let endpoint = Self::resolve_endpoint(meta_endpoint.as_deref(), option_env!("DETECTOR_ENDPOINT"));
        let variant = Variant::parse(meta_content(VARIANT_META).as_deref());
        Self { endpoint, variant }
    }

    fn resolve_endpoint(meta: Option<&str>, build_time: Option<&str>) -> Endpoint {
        Endpoint::resolve([meta, build_time]).unwrap_or_else(|e| {
            console::warn!(format!("{}; using default endpoint", e));
            Endpoint::default()
        })
    }
}

fn meta_content(name: &str) -> Option<String> {
    document()
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?
        .get_attribute("content")
}
