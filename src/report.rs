//! 判定結果のテキスト表示

use crate::runner::{DetectOutcome, OutcomeStatus};
use detector_common::{format_confidence, LabelTone, Prediction, SubmissionResult};

const BAR_CELLS: usize = 20;

/// 信頼度バー（例: `[#################---]`）
pub fn confidence_bar(prediction: &Prediction) -> String {
    let filled = ((prediction.bar_width() / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

fn paint(text: &str, tone: LabelTone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let code = match tone {
        LabelTone::Affirmative => "32",
        LabelTone::Adverse => "31",
        LabelTone::Neutral => "36",
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

pub fn render_outcome(outcome: &DetectOutcome, color: bool) -> String {
    let header = outcome.file.display().to_string();
    match &outcome.status {
        OutcomeStatus::Skipped { skipped } => format!("{}\n  skipped: {}", header, skipped),
        OutcomeStatus::Completed(SubmissionResult::Error { error }) => {
            format!("{}\n  error: {}", header, error)
        }
        OutcomeStatus::Completed(SubmissionResult::Prediction(prediction)) => format!(
            "{}\n  Prediction: {}\n  Confidence: {} {}",
            header,
            paint(&prediction.label, prediction.tone(), color),
            confidence_bar(prediction),
            format_confidence(prediction.confidence),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn completed(result: SubmissionResult) -> DetectOutcome {
        DetectOutcome {
            file: PathBuf::from("photo.png"),
            status: OutcomeStatus::Completed(result),
        }
    }

    #[test]
    fn test_confidence_bar_proportional() {
        assert_eq!(confidence_bar(&Prediction::new("Real", 0.0)), format!("[{}]", "-".repeat(20)));
        assert_eq!(confidence_bar(&Prediction::new("Real", 100.0)), format!("[{}]", "#".repeat(20)));
        assert_eq!(
            confidence_bar(&Prediction::new("Real", 87.0)),
            format!("[{}{}]", "#".repeat(17), "-".repeat(3))
        );
    }

    #[test]
    fn test_confidence_bar_clamps() {
        assert_eq!(confidence_bar(&Prediction::new("Fake", 250.0)), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn test_render_prediction_plain() {
        let text = render_outcome(&completed(SubmissionResult::prediction("Real", 87.0)), false);
        assert!(text.contains("Prediction: Real"));
        assert!(text.contains("87%"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_prediction_colored() {
        let real = render_outcome(&completed(SubmissionResult::prediction("Real", 87.0)), true);
        assert!(real.contains("\x1b[32mReal"));
        let fake = render_outcome(&completed(SubmissionResult::prediction("Fake", 91.0)), true);
        assert!(fake.contains("\x1b[31mFake"));
    }

    #[test]
    fn test_render_error_and_skip() {
        let error = render_outcome(&completed(SubmissionResult::error("Model not loaded")), false);
        assert!(error.contains("error: Model not loaded"));

        let skipped = DetectOutcome {
            file: PathBuf::from("notes.txt"),
            status: OutcomeStatus::Skipped {
                skipped: "not an image".into(),
            },
        };
        assert!(render_outcome(&skipped, false).contains("skipped: not an image"));
    }
}
