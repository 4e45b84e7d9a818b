//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、またはドラッグ&ドロップ。
//! ブラウザ既定のドロップ動作（ファイルを開いて遷移する）は抑止する。

use detector_common::SelectOutcome;
use gloo::console;
use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::detector::WidgetSignal;
use crate::preview::ObjectUrl;

#[component]
pub fn UploadArea(widget: WidgetSignal) -> impl IntoView {
    let input_ref = NodeRef::<Input>::new();
    let is_busy = move || widget.with(|w| w.is_submitting());

    let on_dragenter = move |ev: DragEvent| {
        suppress(&ev);
        if !is_busy() {
            widget.update(|w| w.drag_enter());
        }
    };

    let on_dragover = move |ev: DragEvent| {
        suppress(&ev);
    };

    let on_dragleave = move |ev: DragEvent| {
        suppress(&ev);
        widget.update(|w| w.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        suppress(&ev);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => select_file(widget, file, true),
            None => widget.update(|w| w.drag_leave()),
        }
    };

    let on_click = move |_| {
        if is_busy() {
            return;
        }
        // ファイル選択ダイアログを開く
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            select_file(widget, file, false);
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if widget.with(|w| w.drag_active()) {
                    classes.push("dragover");
                }
                if is_busy() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
        >
            <Show
                when=move || widget.with(|w| w.has_file())
                fallback=|| view! {
                    <div class="upload-icon">"📷"</div>
                    <p class="text-muted">"Drag & drop an image or click to upload"</p>
                }
            >
                <img
                    class="preview"
                    alt="Preview"
                    src=move || widget.with(|w| {
                        w.preview().map(|p| p.as_str().to_string()).unwrap_or_default()
                    })
                />
            </Show>
        </div>
        <input
            type="file"
            accept="image/*"
            style="display: none"
            node_ref=input_ref
            on:change=on_change
        />
    }
}

fn suppress(ev: &DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn select_file(widget: WidgetSignal, file: File, dropped: bool) {
    let declared_type = file.type_();
    let outcome = widget
        .try_update(|w| {
            if dropped {
                w.drop_file(&declared_type, file, ObjectUrl::for_file)
            } else {
                w.select(&declared_type, file, ObjectUrl::for_file)
            }
        });
    match outcome {
        Some(SelectOutcome::Accepted) | None => {}
        Some(other) => console::debug!(format!("selection ignored: {:?}", other)),
    }
}
