//! ランディングページのナビゲーションバー
//!
//! スクロール量とビューポート幅だけを追跡する。

use detector_common::layout::COMPACT_NAV_WIDTH;
use detector_common::NavLayout;
use leptos::ev;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// (セクションID, 表示名)
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("detect", "Detect"),
    ("how-it-works", "How it works"),
    ("about", "About"),
];

fn current_layout() -> NavLayout {
    let window = window();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(COMPACT_NAV_WIDTH);
    NavLayout::from_viewport(scroll_y, width)
}

pub fn scroll_to_section(id: &str) {
    if let Some(element) = document().get_element_by_id(id) {
        element.scroll_into_view();
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (layout, set_layout) = signal(current_layout());
    let (menu_open, set_menu_open) = signal(false);

    let refresh = move || {
        let next = current_layout();
        if !next.compact {
            set_menu_open.set(false);
        }
        set_layout.set(next);
    };

    let scroll_handle = window_event_listener(ev::scroll, move |_| refresh());
    let resize_handle = window_event_listener(ev::resize, move |_| refresh());
    on_cleanup(move || {
        scroll_handle.remove();
        resize_handle.remove();
    });

    let links = NAV_SECTIONS
        .iter()
        .map(|&(id, label)| {
            view! {
                <li>
                    <a
                        href=format!("#{}", id)
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            scroll_to_section(id);
                            set_menu_open.set(false);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=move || layout.get().class_name()>
            <a class="brand" href="#home">"RitweekAI"</a>
            <Show when=move || layout.get().compact>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </Show>
            <ul
                class="nav-links"
                class:open=move || menu_open.get()
                class:collapsed=move || layout.get().compact && !menu_open.get()
            >
                {links}
            </ul>
        </nav>
    }
}
