//! 判定結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Prediction: 推論サービスが返すラベルと信頼度
//! - SubmissionResult: 1回の送信の最終結果（成功 or エラー）
//! - LabelTone: ラベルに応じた表示色の分類

use serde::Serialize;

/// 推論結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    #[serde(rename = "prediction")]
    pub label: String,

    /// パーセント値（0〜100）
    pub confidence: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    pub fn tone(&self) -> LabelTone {
        LabelTone::for_label(&self.label)
    }

    /// 信頼度バーの幅（%）。範囲外の値は0〜100に丸める
    pub fn bar_width(&self) -> f64 {
        confidence_width(self.confidence)
    }
}

/// 送信結果
///
/// JSONでは `{prediction, confidence}` または `{error}` の形になる
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubmissionResult {
    Prediction(Prediction),
    Error { error: String },
}

impl SubmissionResult {
    pub fn prediction(label: impl Into<String>, confidence: f64) -> Self {
        SubmissionResult::Prediction(Prediction::new(label, confidence))
    }

    pub fn error(message: impl Into<String>) -> Self {
        SubmissionResult::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionResult::Error { .. })
    }

    pub fn as_prediction(&self) -> Option<&Prediction> {
        match self {
            SubmissionResult::Prediction(p) => Some(p),
            SubmissionResult::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionResult::Prediction(_) => None,
            SubmissionResult::Error { error } => Some(error),
        }
    }
}

/// ラベルの色分け
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    /// 実写判定（緑）
    Affirmative,
    /// AI生成判定（赤）
    Adverse,
    Neutral,
}

const AFFIRMATIVE_LABELS: &[&str] = &["real", "human"];
const ADVERSE_LABELS: &[&str] = &["fake", "ai", "artificial"];

impl LabelTone {
    pub fn for_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if AFFIRMATIVE_LABELS.contains(&normalized.as_str()) {
            LabelTone::Affirmative
        } else if ADVERSE_LABELS.contains(&normalized.as_str()) {
            LabelTone::Adverse
        } else {
            LabelTone::Neutral
        }
    }

    /// CSSクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelTone::Affirmative => "affirmative",
            LabelTone::Adverse => "adverse",
            LabelTone::Neutral => "neutral",
        }
    }

    /// バーの色
    pub fn color(&self) -> &'static str {
        match self {
            LabelTone::Affirmative => "#22c55e",
            LabelTone::Adverse => "#ef4444",
            LabelTone::Neutral => "#0af",
        }
    }
}

pub fn confidence_width(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 100.0)
}

/// 表示用の信頼度文字列（例: "87.5%"）
pub fn format_confidence(confidence: f64) -> String {
    let rounded = (confidence * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{}%", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_tone_real_is_affirmative() {
        assert_eq!(LabelTone::for_label("Real"), LabelTone::Affirmative);
        assert_eq!(LabelTone::for_label("REAL"), LabelTone::Affirmative);
        assert_eq!(LabelTone::for_label(" human "), LabelTone::Affirmative);
    }

    #[test]
    fn test_label_tone_fake_is_adverse() {
        assert_eq!(LabelTone::for_label("Fake"), LabelTone::Adverse);
        assert_eq!(LabelTone::for_label("AI"), LabelTone::Adverse);
        assert_eq!(LabelTone::for_label("artificial"), LabelTone::Adverse);
    }

    #[test]
    fn test_label_tone_unknown_is_neutral() {
        assert_eq!(LabelTone::for_label("Unknown"), LabelTone::Neutral);
        assert_eq!(LabelTone::for_label(""), LabelTone::Neutral);
    }

    #[test]
    fn test_label_tone_colors_differ() {
        assert_ne!(LabelTone::Affirmative.color(), LabelTone::Adverse.color());
        assert_eq!(LabelTone::Adverse.as_str(), "adverse");
    }

    #[test]
    fn test_confidence_width_clamps() {
        assert_eq!(confidence_width(87.0), 87.0);
        assert_eq!(confidence_width(-5.0), 0.0);
        assert_eq!(confidence_width(150.0), 100.0);
        assert_eq!(confidence_width(f64::NAN), 0.0);
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(87.0), "87%");
        assert_eq!(format_confidence(87.5), "87.5%");
        assert_eq!(format_confidence(99.126), "99.13%");
    }

    #[test]
    fn test_prediction_bar_width() {
        let p = Prediction::new("Real", 87.0);
        assert_eq!(p.bar_width(), 87.0);
        assert_eq!(p.tone(), LabelTone::Affirmative);
    }

    #[test]
    fn test_submission_result_serialize_prediction() {
        let result = SubmissionResult::prediction("Fake", 92.31);
        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"prediction":"Fake","confidence":92.31}"#);
    }

    #[test]
    fn test_submission_result_serialize_error() {
        let result = SubmissionResult::error("boom");
        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"error":"boom"}"#);
        assert!(result.is_error());
        assert_eq!(result.error_message(), Some("boom"));
        assert!(result.as_prediction().is_none());
    }
}
