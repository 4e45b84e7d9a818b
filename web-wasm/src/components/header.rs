//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"RitweekAI Detector"</h1>
            <p class="text-muted">"Advanced AI-powered image analysis"</p>
        </header>
    }
}
