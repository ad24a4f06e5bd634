/// Vidscribe - video download & transcription form
/// Built with Rust + WASM + Yew

mod api;
mod config;
mod error;
mod format;
mod models;
mod notify;
mod theme;
mod url_fields;
mod validation;
pub mod ui;

pub use config::ClientConfig;
pub use theme::{Theme, apply_theme, load_theme, persist_theme};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app with the default endpoints
#[wasm_bindgen]
pub fn start_app() {
    mount(ClientConfig::default());
}

// Start the Yew app with a (partial) config object from the host page
#[wasm_bindgen]
pub fn start_app_with_config(config: JsValue) {
    mount(ClientConfig::from_js(config));
}

fn mount(config: ClientConfig) {
    log::info!("Mounting app, backend endpoint {}", config.process_endpoint);
    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps { config }).render();
}

// Re-export validation and formatting for JavaScript access
#[wasm_bindgen]
pub fn is_supported_url(url: &str) -> bool {
    validation::is_supported_url(url, &ClientConfig::default().supported_domains)
}

#[wasm_bindgen]
pub fn format_duration(seconds: Option<f64>) -> String {
    format::format_duration(seconds)
}
