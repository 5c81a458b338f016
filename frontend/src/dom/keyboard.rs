//! Global keyboard shortcuts.

use gloo_utils::document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, KeyboardEvent};

use super::alerts;
use crate::types::{UiError, UiResult};

/// Install the document-wide keydown handler.
pub fn bind() -> UiResult<()> {
    let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        on_keydown(&event);
    });
    document()
        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
        .map_err(UiError::from_js)?;
    // Listener lives for the lifetime of the document.
    handler.forget();
    Ok(())
}

fn on_keydown(event: &KeyboardEvent) {
    // Ctrl+Enter submits the form around the focused element directly,
    // bypassing the submission gate.
    if event.ctrl_key() && event.key() == "Enter" {
        submit_active_form();
    }

    if event.key() == "Escape" {
        alerts::dismiss_all();
    }
}

fn submit_active_form() {
    let active = match document().active_element() {
        Some(active) => active,
        None => return,
    };
    if let Ok(Some(element)) = active.closest("form") {
        if let Some(form) = element.dyn_ref::<HtmlFormElement>() {
            if let Err(e) = form.submit() {
                log::warn!("Could not submit focused form: {:?}", e);
            }
        }
    }
}
