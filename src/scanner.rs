//! 入力パスの展開と画像ファイルの読み込み準備

use crate::error::{DetectorError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 送信対象のファイル
///
/// 中身は送信時に読むので、ここではパスとMIMEタイプだけを持つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl ImageUpload {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            file_name,
            mime_type: declared_type(path),
        }
    }
}

/// CLI版のプレビュー（画像ヘッダから読んだ寸法）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePreview {
    pub width: u32,
    pub height: u32,
}

impl ImagePreview {
    pub fn for_upload(upload: &ImageUpload) -> Option<Self> {
        match image::image_dimensions(&upload.path) {
            Ok((width, height)) => Some(Self { width, height }),
            Err(e) => {
                tracing::warn!("画像を読み込めません {}: {}", upload.path.display(), e);
                None
            }
        }
    }
}

/// 拡張子から宣言MIMEタイプを決める
pub fn declared_type(path: &Path) -> String {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| "application/octet-stream".to_string())
}

/// ファイルはそのまま、フォルダは直下のファイルに展開する
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if !input.exists() {
            return Err(DetectorError::FileNotFound(input.display().to_string()));
        }

        if input.is_file() {
            files.push(input.clone());
            continue;
        }

        let mut entries: Vec<PathBuf> = WalkDir::new(input)
            .min_depth(1)
            .max_depth(1) // 直下のみ（再帰しない）
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect();

        // ファイル名でソート
        entries.sort();
        files.extend(entries);
    }

    Ok(files)
}
