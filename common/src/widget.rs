//! アップロード＆判定ウィジェットの状態機械
//!
//! `Idle → Submitting → Completed → Idle` を明示的なenumで表す。
//! 画面描画やHTTP送信はフロントエンド側（WASM / CLI）の責務で、
//! ここでは選択ファイル・プレビュー・送信状態の整合性だけを扱う。
//!
//! プレビューハンドルは選択ファイルと同じ `Selection` に格納されるため、
//! ファイルが置き換わるとプレビューも一緒にdropされる（解放処理は `Drop` 実装側）。

use crate::types::SubmissionResult;

pub const SUBMIT_LABEL: &str = "Detect";
pub const BUSY_LABEL: &str = "Analyzing...";

/// 宣言されたMIMEタイプが画像かどうか
pub fn is_image_type(declared_type: &str) -> bool {
    declared_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// 送信状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting,
    Completed(SubmissionResult),
}

/// 選択中のファイルとそのプレビュー
#[derive(Debug)]
pub struct Selection<F, P> {
    pub file: F,
    pub preview: P,
}

/// ファイル選択の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Accepted,
    /// 画像以外（黙って無視する）
    NotAnImage,
    /// プレビューを作れなかった
    PreviewUnavailable,
    /// 送信中は選択を受け付けない
    Busy,
}

/// 送信できない理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    NoFile,
    InFlight,
}

/// 送信中の1リクエストを表すチケット
///
/// `begin_submit` でのみ発行され、`finish` で消費される。
#[derive(Debug)]
#[must_use = "the ticket must be passed to `finish` when the request settles"]
pub struct SubmitTicket {
    generation: u64,
}

/// アップロード＆判定ウィジェット
#[derive(Debug)]
pub struct UploadWidget<F, P> {
    selection: Option<Selection<F, P>>,
    state: RequestState,
    drag_active: bool,
    generation: u64,
}

impl<F, P> Default for UploadWidget<F, P> {
    fn default() -> Self {
        Self {
            selection: None,
            state: RequestState::Idle,
            drag_active: false,
            generation: 0,
        }
    }
}

impl<F, P> UploadWidget<F, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn file(&self) -> Option<&F> {
        self.selection.as_ref().map(|s| &s.file)
    }

    pub fn preview(&self) -> Option<&P> {
        self.selection.as_ref().map(|s| &s.preview)
    }

    pub fn has_file(&self) -> bool {
        self.selection.is_some()
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        match &self.state {
            RequestState::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, RequestState::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        self.has_file() && !self.is_submitting()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// ファイルを選択
    ///
    /// 画像でなければ何もしない。受け付けた場合は古いプレビューを解放し、
    /// 前回の結果を消して `Idle` に戻る。
    ///
    /// # Arguments
    /// * `declared_type` - ファイルのMIMEタイプ（例: "image/png"）
    /// * `file` - 選択されたファイル
    /// * `make_preview` - プレビューハンドルを作る関数。`None` なら選択しない
    pub fn select(
        &mut self,
        declared_type: &str,
        file: F,
        make_preview: impl FnOnce(&F) -> Option<P>,
    ) -> SelectOutcome {
        if self.is_submitting() {
            return SelectOutcome::Busy;
        }
        if !is_image_type(declared_type) {
            tracing::debug!("ignoring non-image selection: {:?}", declared_type);
            return SelectOutcome::NotAnImage;
        }
        let Some(preview) = make_preview(&file) else {
            return SelectOutcome::PreviewUnavailable;
        };

        // 古いプレビューはここでdropされる
        self.selection = Some(Selection { file, preview });
        self.state = RequestState::Idle;
        SelectOutcome::Accepted
    }

    pub fn drag_enter(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// ドロップされたファイルを選択
    pub fn drop_file(
        &mut self,
        declared_type: &str,
        file: F,
        make_preview: impl FnOnce(&F) -> Option<P>,
    ) -> SelectOutcome {
        self.drag_active = false;
        self.select(declared_type, file, make_preview)
    }

    /// 送信開始
    ///
    /// 送信中の間は `Err(SubmitBlocked::InFlight)` を返すので、
    /// 連打しても同時に送られるリクエストは1つだけになる。
    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, F), SubmitBlocked>
    where
        F: Clone,
    {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        let Some(selection) = &self.selection else {
            return Err(SubmitBlocked::NoFile);
        };
        let file = selection.file.clone();

        self.generation += 1;
        self.state = RequestState::Submitting;
        Ok((
            SubmitTicket {
                generation: self.generation,
            },
            file,
        ))
    }

    /// 送信完了（成功・失敗とも）
    ///
    /// 現在のチケットでなければ結果を捨てて `false` を返す
    pub fn finish(&mut self, ticket: SubmitTicket, result: SubmissionResult) -> bool {
        if !self.is_submitting() || ticket.generation != self.generation {
            tracing::debug!("discarding stale submission result");
            return false;
        }
        self.state = RequestState::Completed(result);
        true
    }

    /// 選択ファイル・プレビュー・結果をすべて破棄する（アンマウント時）
    pub fn reset(&mut self) {
        self.selection = None;
        self.state = RequestState::Idle;
        self.drag_active = false;
        self.generation += 1;
    }
}
