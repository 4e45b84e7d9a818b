//! 画像プレビュー用のObject URL
//!
//! `URL.createObjectURL` で作ったURLはdrop時に `URL.revokeObjectURL` で解放する。

use gloo::console;
use web_sys::{File, Url};

#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    pub fn for_file(file: &File) -> Option<Self> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Some(Self { url }),
            Err(err) => {
                console::warn!("プレビューを作成できません", err);
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}
