//! メインアプリケーションコンポーネント

use detector_common::layout::background_style;
use detector_common::Endpoint;
use leptos::prelude::*;

use crate::components::background::use_gradient_angle;
use crate::components::detector::Detector;
use crate::components::header::Header;
use crate::components::landing::LandingPage;
use crate::config::{Variant, WebConfig};

#[component]
pub fn App(config: WebConfig) -> impl IntoView {
    let WebConfig { endpoint, variant } = config;
    match variant {
        Variant::Minimal => view! { <MinimalPage endpoint=endpoint /> }.into_any(),
        Variant::Landing => view! { <LandingPage endpoint=endpoint /> }.into_any(),
    }
}

/// カード1枚だけのシンプルな画面
#[component]
fn MinimalPage(endpoint: Endpoint) -> impl IntoView {
    let angle = use_gradient_angle();

    view! {
        <div class="page minimal" style=move || background_style(angle.get())>
            <div class="card">
                <Header />
                <Detector endpoint=endpoint />
            </div>
        </div>
    }
}
