//! DOM binding layer.
//!
//! Queries the server-rendered page, extracts typed views, runs them
//! through the controller and applies the resulting decisions
//! (prevent-default, focus, alert, busy state). All listeners are wired
//! once at page load.

mod alerts;
pub(crate) mod forms;
mod keyboard;
mod links;
mod refresh;
mod registry;

pub use alerts::show_alert;

use gloo_utils::{document, window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::controller::ConfirmPrompt;
use crate::services::bootstrap;
use crate::types::{UiError, UiResult};

/// Browser-native confirmation dialog.
pub struct NativeConfirm;

impl ConfirmPrompt for NativeConfirm {
    fn confirm(&self, message: &str) -> bool {
        // An unavailable dialog reads as a decline.
        window().confirm_with_message(message).unwrap_or(false)
    }
}

/// Wire every page region.
///
/// A region that fails to wire is logged and skipped; one broken corner
/// must not keep the rest of the page from being enhanced.
pub fn boot() {
    wire("tooltips", attach_tooltips);
    wire("form gates", forms::bind_all);
    wire("alert auto-dismiss", alerts::auto_dismiss_existing);
    wire("status refresh", refresh::start_if_user_panel);
    wire("link confirmations", links::bind_all);
    wire("keyboard shortcuts", keyboard::bind);
    wire("unload cleanup", bind_unload_cleanup);
    forms::prefill_name();
}

fn wire(region: &str, bind: impl FnOnce() -> UiResult<()>) {
    if let Err(e) = bind() {
        log::warn!("Could not wire {}: {}", region, e);
    }
}

/// Activate a tooltip on every opted-in element.
fn attach_tooltips() -> UiResult<()> {
    let list = document()
        .query_selector_all("[data-bs-toggle=\"tooltip\"]")
        .map_err(UiError::from_js)?;

    for index in 0..list.length() {
        if let Some(element) = list.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            if let Err(e) = bootstrap::attach_tooltip(&element) {
                log::warn!("Could not attach tooltip: {}", e);
            }
        }
    }
    Ok(())
}

/// Cancel the pending submission-reset timers when the document goes away.
fn bind_unload_cleanup() -> UiResult<()> {
    let handler = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        registry::cancel_pending_resets();
    });
    window()
        .add_event_listener_with_callback("pagehide", handler.as_ref().unchecked_ref())
        .map_err(UiError::from_js)?;
    // Listener lives for the lifetime of the document.
    handler.forget();
    Ok(())
}
