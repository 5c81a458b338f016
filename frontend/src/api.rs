//! Exported surface for other page scripts.
//!
//! Everything hangs off a single `CheckinSystem` namespace object, so page
//! scripts call e.g. `CheckinSystem.displayAlert("Reserva confirmada",
//! "success")`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::config;
use crate::controller;
use crate::dom;
use crate::services::storage;
use crate::types::AlertKind;

/// Namespace object grouping the helpers exported to page scripts.
#[wasm_bindgen]
pub struct CheckinSystem;

#[wasm_bindgen]
impl CheckinSystem {
    /// Show a transient banner. `kind` is one of `success`, `error`,
    /// `warning`, `info`; anything else displays as info.
    #[wasm_bindgen(js_name = displayAlert)]
    pub fn display_alert(message: &str, kind: Option<String>) {
        let kind = kind
            .as_deref()
            .map(AlertKind::from_name)
            .unwrap_or(AlertKind::Info);
        dom::show_alert(message, kind);
    }

    /// Format an `H:M` time string for display.
    #[wasm_bindgen(js_name = formatTime)]
    pub fn format_time(raw: &str) -> String {
        controller::format_time(raw)
    }

    /// Prefix the page title with a notification count; zero clears it.
    #[wasm_bindgen(js_name = updatePageTitle)]
    pub fn update_page_title(count: u32) {
        let document = gloo_utils::document();
        document.set_title(&controller::compose_title(&document.title(), count));
    }

    /// Smooth-scroll `element` into the middle of the viewport.
    #[wasm_bindgen(js_name = smoothScrollTo)]
    pub fn smooth_scroll_to(element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Swap `button` into its busy state.
    ///
    /// Returns a function that restores the original label and re-enables
    /// the control.
    #[wasm_bindgen(js_name = addLoadingState)]
    pub fn add_loading_state(button: HtmlButtonElement, text: Option<String>) -> js_sys::Function {
        let label = text.unwrap_or_else(|| config::BUSY_LABEL.to_string());
        let original = button.text_content().unwrap_or_default();
        button.set_disabled(true);
        dom::forms::apply_busy_label(&button, &label);

        Closure::once_into_js(move || {
            button.set_text_content(Some(&original));
            button.set_disabled(false);
        })
        .unchecked_into()
    }

    /// Current date and time formatted for the display locale.
    #[wasm_bindgen(js_name = getCurrentLocalTime)]
    pub fn get_current_local_time() -> String {
        js_sys::Date::new_0()
            .to_locale_string(config::DISPLAY_LOCALE, &JsValue::UNDEFINED)
            .into()
    }

    /// Whether slot cancellation is still open on the local clock.
    #[wasm_bindgen(js_name = canCancel)]
    pub fn can_cancel() -> bool {
        controller::can_cancel()
    }

    /// Store `value` JSON-encoded under `key`. Best-effort.
    #[wasm_bindgen(js_name = storageSet)]
    pub fn storage_set(key: &str, value: &JsValue) {
        match js_sys::JSON::stringify(value) {
            Ok(json) => storage::set_raw(key, &String::from(json)),
            Err(e) => log::warn!("Could not serialize value for '{}': {:?}", key, e),
        }
    }

    /// Read the JSON-encoded value under `key`; `null` when absent.
    #[wasm_bindgen(js_name = storageGet)]
    pub fn storage_get(key: &str) -> JsValue {
        storage::get_raw(key)
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(JsValue::NULL)
    }

    /// Remove `key` from storage. Best-effort.
    #[wasm_bindgen(js_name = storageRemove)]
    pub fn storage_remove(key: &str) {
        storage::remove(key);
    }
}
