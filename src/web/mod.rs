//! Browser bindings
//!
//! Connects the page initializer to the real document through `web-sys` and
//! exposes the wasm start hook. Only compiled with `--features web` on a
//! `wasm32` target.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element};

use crate::page::{self, PageElement, PageHost, ReadySignal, ReadyState};
use crate::shared::{validate_invite, AppConfig, JoinError};

const CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";

fn js_error(context: &str, err: JsValue) -> JoinError {
    JoinError::dom(format!("{context}: {err:?}"))
}

/// The browser document as a page host
#[derive(Debug, Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if there is one
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }
}

impl PageElement for Element {
    fn remove_class(&self, class: &str) -> Result<(), JoinError> {
        self.class_list()
            .remove_1(class)
            .map_err(|e| js_error("classList.remove", e))
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), JoinError> {
        Element::set_attribute(self, name, value).map_err(|e| js_error("setAttribute", e))
    }
}

impl PageHost for WebPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl ReadySignal for WebPage {
    fn ready_state(&self) -> ReadyState {
        self.document.ready_state().parse().unwrap_or_else(|err: JoinError| {
            tracing::warn!(error = %err, "treating document as loaded");
            ReadyState::Complete
        })
    }

    fn on_content_loaded(&self, callback: Box<dyn FnOnce()>) -> Result<(), JoinError> {
        let listener = Closure::once_into_js(move || callback());
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        self.document
            .add_event_listener_with_callback_and_add_event_listener_options(
                CONTENT_LOADED_EVENT,
                listener.unchecked_ref(),
                &options,
            )
            .map_err(|e| js_error("addEventListener", e))
    }
}

/// Wasm entry point: set up console logging and initialize the page
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A logger may already be installed when several modules share the page.
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(page) = WebPage::from_window() else {
        tracing::error!("no document available");
        return;
    };

    let config = AppConfig::global();
    if let Err(err) = config.validate() {
        tracing::warn!(error = %err, "join button unavailable");
    }

    page::boot(page, config.clone());
}

/// Validate an invite from JavaScript; anything but a valid string yields `undefined`
#[wasm_bindgen(js_name = validateInviteCode)]
pub fn validate_invite_code(input: JsValue) -> Option<String> {
    input
        .as_string()
        .and_then(|raw| validate_invite(&raw))
        .map(String::from)
}
