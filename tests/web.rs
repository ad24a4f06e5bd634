//! Browser tests, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use vidscribe_web::{Theme, apply_theme, load_theme, persist_theme};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear(key: &str) {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn test_missing_theme_uses_default() {
    clear("theme-test-missing");
    assert_eq!(load_theme("theme-test-missing", Theme::Dark), Theme::Dark);
    assert_eq!(load_theme("theme-test-missing", Theme::Light), Theme::Light);
}

#[wasm_bindgen_test]
fn test_theme_round_trips_through_local_storage() {
    clear("theme-test-persist");
    persist_theme("theme-test-persist", Theme::Light);
    assert_eq!(load_theme("theme-test-persist", Theme::Dark), Theme::Light);

    persist_theme("theme-test-persist", Theme::Light.toggled());
    assert_eq!(load_theme("theme-test-persist", Theme::Light), Theme::Dark);
}

#[wasm_bindgen_test]
fn test_garbage_theme_falls_back() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item("theme-test-garbage", "sepia").unwrap();
    assert_eq!(load_theme("theme-test-garbage", Theme::Dark), Theme::Dark);
}

#[wasm_bindgen_test]
fn test_apply_theme_sets_document_attribute() {
    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap();

    apply_theme(Theme::Light);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));

    apply_theme(Theme::Dark);
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
}
