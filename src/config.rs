/// Client configuration, overridable from the host page

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub process_endpoint: String,
    pub download_prefix: String,
    pub cleanup_endpoint: String,
    pub supported_domains: Vec<String>,
    pub notification_ms: u32,
    pub notification_exit_ms: u32,
    pub theme_storage_key: String,
    pub default_theme: Theme,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            process_endpoint: "/process_videos".to_string(),
            download_prefix: "/download".to_string(),
            cleanup_endpoint: "/cleanup".to_string(),
            supported_domains: ["youtube.com", "youtu.be", "instagram.com", "tiktok.com", "pinterest.com"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            notification_ms: 4000,
            notification_exit_ms: 300,
            theme_storage_key: "theme".to_string(),
            default_theme: Theme::Dark,
        }
    }
}

impl ClientConfig {
    /// Decode a config object handed over from JavaScript.
    ///
    /// `null`/`undefined` and malformed objects fall back to the defaults.
    pub fn from_js(value: JsValue) -> ClientConfig {
        if value.is_null() || value.is_undefined() {
            return ClientConfig::default();
        }

        match serde_wasm_bindgen::from_value::<ClientConfig>(value) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring invalid client config: {:?}", e);
                ClientConfig::default()
            }
        }
    }
}
