//! ランディングページ
//!
//! ナビゲーション・ヒーロー・説明セクションの中に判定ウィジェットを埋め込む。

use detector_common::Endpoint;
use leptos::prelude::*;

use crate::components::detector::Detector;
use crate::components::header::Header;
use crate::components::navbar::{scroll_to_section, Navbar};

const STEPS: &[(&str, &str)] = &[
    ("1. Upload", "Drop an image or pick one from your device."),
    ("2. Analyze", "A Vision Transformer model inspects the image."),
    ("3. Result", "See whether it looks Real or Fake, with a confidence score."),
];

#[component]
pub fn LandingPage(endpoint: Endpoint) -> impl IntoView {
    let steps = STEPS
        .iter()
        .map(|&(title, text)| {
            view! {
                <div class="step">
                    <h3>{title}</h3>
                    <p class="text-muted">{text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page landing">
            <Navbar />

            <section id="home" class="hero">
                <h1>"Is that image real?"</h1>
                <p class="text-muted">"Detect AI-generated images in seconds."</p>
                <button class="btn btn-primary" on:click=move |_| scroll_to_section("detect")>
                    "Try it now"
                </button>
            </section>

            <section id="detect" class="section">
                <div class="card">
                    <Header />
                    <Detector endpoint=endpoint />
                </div>
            </section>

            <section id="how-it-works" class="section">
                <h2>"How it works"</h2>
                <div class="steps">{steps}</div>
            </section>

            <section id="about" class="section">
                <h2>"About"</h2>
                <p class="text-muted">
                    "RitweekAI Detector sends your image to a hosted classifier and shows its verdict. "
                    "Images are only used to compute the prediction."
                </p>
            </section>

            <footer class="footer text-muted">"© RitweekAI"</footer>
        </div>
    }
}
