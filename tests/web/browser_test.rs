//! Browser tests for the web bindings
//!
//! Run with `wasm-pack test --headless --firefox -- --features web`.

#![cfg(all(feature = "web", target_arch = "wasm32"))]

use community_join::page::{initialize_page, PageState, ReadySignal, ReadyState};
use community_join::web::{validate_invite_code, WebPage};
use community_join::AppConfig;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const IDS: [&str; 3] = ["join-btn", "notice-dev", "notice-error"];

fn fresh_page() -> WebPage {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    for id in IDS {
        if let Some(old) = document.get_element_by_id(id) {
            old.remove();
        }
        let element = document.create_element("a").unwrap();
        element.set_id(id);
        element.set_class_name("hidden");
        body.append_child(&element).unwrap();
    }
    WebPage::new(document)
}

fn is_hidden(id: &str) -> bool {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap()
        .class_list()
        .contains("hidden")
}

#[wasm_bindgen_test]
fn join_button_gets_link() {
    let page = fresh_page();
    let config = AppConfig::builder().invite("xanoks").build();

    let state = initialize_page(&page, &config).unwrap();

    assert!(matches!(state, PageState::Join { .. }));
    let button = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("join-btn")
        .unwrap();
    assert_eq!(
        button.get_attribute("href").as_deref(),
        Some("https://discord.gg/xanoks")
    );
    assert!(!is_hidden("join-btn"));
    assert!(is_hidden("notice-dev"));
    assert!(is_hidden("notice-error"));
}

#[wasm_bindgen_test]
fn dev_mode_reveals_dev_notice() {
    let page = fresh_page();
    let config = AppConfig::builder().dev_mode(true).invite("xanoks").build();

    initialize_page(&page, &config);

    assert!(!is_hidden("notice-dev"));
    assert!(is_hidden("join-btn"));
}

#[wasm_bindgen_test]
fn document_is_parsed_under_test_runner() {
    let page = fresh_page();
    assert_ne!(page.ready_state(), ReadyState::Loading);
}

#[wasm_bindgen_test]
fn ready_state_matches_document() {
    let page = fresh_page();
    let document = web_sys::window().unwrap().document().unwrap();
    assert_eq!(page.ready_state().as_str(), document.ready_state());
}

#[wasm_bindgen_test]
fn missing_element_leaves_page_untouched() {
    let page = fresh_page();
    let document = web_sys::window().unwrap().document().unwrap();
    document.get_element_by_id("notice-error").unwrap().remove();
    let config = AppConfig::builder().invite("xanoks").build();

    assert_eq!(initialize_page(&page, &config), None);

    let button = document.get_element_by_id("join-btn").unwrap();
    assert!(is_hidden("join-btn"));
    assert!(is_hidden("notice-dev"));
    assert_eq!(button.get_attribute("href"), None);
}

#[wasm_bindgen_test]
fn validate_from_js_values() {
    assert_eq!(
        validate_invite_code(JsValue::from_str("https://discord.gg/xanoks")),
        Some("xanoks".to_string())
    );
    assert_eq!(validate_invite_code(JsValue::NULL), None);
    assert_eq!(validate_invite_code(JsValue::from_f64(123.0)), None);
}
