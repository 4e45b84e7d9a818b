//! アップロード＆判定ウィジェット本体
//!
//! 状態は `detector_common::UploadWidget` 1つにまとめて持ち、
//! イベントハンドラはそれを更新するだけにする。

use detector_common::{Endpoint, UploadWidget};
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::submit_image;
use crate::components::result_card::ResultCard;
use crate::components::upload_area::UploadArea;
use crate::preview::ObjectUrl;

pub type DetectorWidget = UploadWidget<File, ObjectUrl>;

/// `File` はスレッド間で共有できないのでローカルストレージのシグナルに置く
pub type WidgetSignal = RwSignal<DetectorWidget, LocalStorage>;

#[component]
pub fn Detector(endpoint: Endpoint) -> impl IntoView {
    let widget: WidgetSignal = RwSignal::new_local(UploadWidget::new());
    let endpoint = StoredValue::new(endpoint);

    // アンマウント時にプレビューURLを解放する
    on_cleanup(move || {
        widget.try_update_untracked(|w| w.reset());
    });

    let on_submit = move |_| {
        let started = widget.try_update(|w| w.begin_submit());
        let (ticket, file) = match started {
            Some(Ok(started)) => started,
            Some(Err(blocked)) => {
                console::debug!(format!("submit blocked: {:?}", blocked));
                return;
            }
            None => return,
        };
        let url = endpoint.get_value();

        spawn_local(async move {
            let result = submit_image(url.as_str(), &file).await;
            match widget.try_update(|w| w.finish(ticket, result)) {
                Some(true) => {}
                Some(false) => console::debug!("stale prediction result discarded"),
                None => console::debug!("detector unmounted before the response arrived"),
            }
        });
    };

    view! {
        <div class="detector">
            <UploadArea widget=widget />

            <button
                class="btn btn-primary detect-button"
                disabled=move || !widget.with(|w| w.can_submit())
                on:click=on_submit
            >
                {move || widget.with(|w| w.submit_label())}
            </button>

            <ResultCard widget=widget />
        </div>
    }
}
