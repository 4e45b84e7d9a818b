//! CLI版のアップロード＆判定フロー
//!
//! Web版と同じ `UploadWidget` を使い、1ファイルずつ選択→送信→結果表示を行う。

use crate::client::PredictClient;
use crate::scanner::{ImagePreview, ImageUpload};
use detector_common::{SelectOutcome, SubmissionResult, UploadWidget};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type CliWidget = UploadWidget<ImageUpload, ImagePreview>;

/// 1ファイル分の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectOutcome {
    pub file: PathBuf,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutcomeStatus {
    Completed(SubmissionResult),
    Skipped { skipped: String },
}

impl DetectOutcome {
    pub fn result(&self) -> Option<&SubmissionResult> {
        match &self.status {
            OutcomeStatus::Completed(result) => Some(result),
            OutcomeStatus::Skipped { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.result().map(SubmissionResult::is_error).unwrap_or(false)
    }
}

fn skip_reason(outcome: SelectOutcome) -> &'static str {
    match outcome {
        SelectOutcome::Accepted => "accepted",
        SelectOutcome::NotAnImage => "not an image",
        SelectOutcome::PreviewUnavailable => "unreadable image",
        SelectOutcome::Busy => "busy",
    }
}

pub struct DetectRunner<'a> {
    client: &'a PredictClient,
    widget: CliWidget,
    show_progress: bool,
}

impl<'a> DetectRunner<'a> {
    pub fn new(client: &'a PredictClient, show_progress: bool) -> Self {
        Self {
            client,
            widget: CliWidget::new(),
            show_progress,
        }
    }

    pub fn widget(&self) -> &CliWidget {
        &self.widget
    }

    /// ファイルを順番に判定する（同時に送るのは常に1件）
    pub async fn run(&mut self, files: &[PathBuf]) -> Vec<DetectOutcome> {
        let mut outcomes = Vec::with_capacity(files.len());
        for path in files {
            outcomes.push(self.detect_one(path).await);
        }
        outcomes
    }

    pub async fn detect_one(&mut self, path: &Path) -> DetectOutcome {
        let upload = ImageUpload::from_path(path);
        let declared_type = upload.mime_type.clone();

        let selected = self
            .widget
            .select(&declared_type, upload, ImagePreview::for_upload);
        if selected != SelectOutcome::Accepted {
            tracing::warn!("スキップ: {} ({})", path.display(), skip_reason(selected));
            return DetectOutcome {
                file: path.to_path_buf(),
                status: OutcomeStatus::Skipped {
                    skipped: skip_reason(selected).to_string(),
                },
            };
        }

        if let Some(preview) = self.widget.preview() {
            tracing::debug!("{}: {}x{}", path.display(), preview.width, preview.height);
        }

        let (ticket, upload) = match self.widget.begin_submit() {
            Ok(started) => started,
            Err(blocked) => {
                tracing::warn!("送信できません: {:?}", blocked);
                return DetectOutcome {
                    file: path.to_path_buf(),
                    status: OutcomeStatus::Skipped {
                        skipped: "busy".to_string(),
                    },
                };
            }
        };

        let spinner = self.spinner(&upload.file_name);
        let result = self.client.predict(&upload).await;
        spinner.finish_and_clear();

        self.widget.finish(ticket, result.clone());

        DetectOutcome {
            file: path.to_path_buf(),
            status: OutcomeStatus::Completed(result),
        }
    }

    fn spinner(&self, file_name: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("{} {}", self.widget.submit_label(), file_name));
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}
