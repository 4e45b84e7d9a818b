use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("判定できる画像がありませんでした")]
    NoImagesAccepted,

    #[error("{0}件の判定に失敗しました")]
    SubmissionFailed(usize),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] detector_common::Error),
}

pub type Result<T> = std::result::Result<T, DetectorError>;
