//! AI Image Detector Web App (Leptos + WASM)

mod app;
mod components;
pub mod api;
pub mod config;
pub mod preview;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = config::WebConfig::from_document();
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
