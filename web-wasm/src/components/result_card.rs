//! 判定結果カード

use detector_common::{format_confidence, Prediction, SubmissionResult, UploadWidget};
use leptos::prelude::*;

use crate::components::detector::WidgetSignal;

/// 結果だけを切り出す。ドラッグ状態の変化では再描画しない
pub(crate) fn result_memo<F, P>(
    widget: RwSignal<UploadWidget<F, P>, LocalStorage>,
) -> Memo<Option<SubmissionResult>>
where
    F: 'static,
    P: 'static,
{
    Memo::new(move |_| widget.with(|w| w.result().cloned()))
}

#[component]
pub fn ResultCard(widget: WidgetSignal) -> impl IntoView {
    let result = result_memo(widget);
    move || {
        result
            .get()
            .map(|result| match result {
                SubmissionResult::Prediction(prediction) => {
                    view! { <PredictionView prediction=prediction /> }.into_any()
                }
                SubmissionResult::Error { error } => view! {
                    <div class="result-card error">
                        <h2>"Result"</h2>
                        <p class="error-text">{error}</p>
                    </div>
                }
                .into_any(),
            })
    }
}

#[component]
fn PredictionView(prediction: Prediction) -> impl IntoView {
    let tone = prediction.tone();
    let fill_style = format!(
        "width: {}%; background: {}",
        prediction.bar_width(),
        tone.color()
    );

    view! {
        <div class=format!("result-card {}", tone.as_str())>
            <h2>"Result"</h2>
            <p>
                <b>"Prediction: "</b>
                <span class=format!("prediction-label {}", tone.as_str())>
                    {prediction.label.clone()}
                </span>
            </p>
            <div class="confidence">
                <b>"Confidence:"</b>
                <div class="confidence-track">
                    <div class="confidence-fill" style=fill_style />
                </div>
                <span class="confidence-value">{format_confidence(prediction.confidence)}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestWidget = UploadWidget<String, ()>;

    #[test]
    fn test_result_memo_ignores_drag_changes() {
        let owner = Owner::new();
        owner.set();

        let widget = RwSignal::new_local(TestWidget::new());
        let result = result_memo(widget);
        widget.update(|w| {
            w.select("image/png", "cat.png".to_string(), |_| Some(()));
        });
        assert_eq!(result.get_untracked(), None);

        let (ticket, _file) = widget
            .try_update(|w| w.begin_submit())
            .expect("シグナル破棄済み")
            .expect("送信開始失敗");
        widget.update(|w| {
            w.finish(ticket, SubmissionResult::prediction("Real", 87.0));
        });
        let completed = result.get_untracked();
        assert_eq!(completed, Some(SubmissionResult::prediction("Real", 87.0)));

        widget.update(|w| w.drag_enter());
        widget.update(|w| w.drag_leave());
        assert_eq!(result.get_untracked(), completed);
    }
}
