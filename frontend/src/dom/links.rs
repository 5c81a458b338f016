//! Confirmation gating for check-in and cancellation links.

use gloo_utils::document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlAnchorElement};

use super::NativeConfirm;
use crate::controller::gate_navigation;
use crate::rules;
use crate::types::{Gate, UiError, UiResult};

/// Attach a confirmation gate to every link the rule table covers.
pub fn bind_all() -> UiResult<()> {
    for rule in rules::LINK_RULES {
        let selector = rules::link_selector(rule);
        let list = document()
            .query_selector_all(&selector)
            .map_err(UiError::from_js)?;

        for index in 0..list.length() {
            if let Some(anchor) = list
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlAnchorElement>().ok())
            {
                bind(anchor)?;
            }
        }
    }
    Ok(())
}

fn bind(anchor: HtmlAnchorElement) -> UiResult<()> {
    let target = anchor.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if gate_navigation(&target.href(), &NativeConfirm) != Gate::Proceed {
            event.prevent_default();
        }
    });
    anchor
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(UiError::from_js)?;
    // Listener lives for the lifetime of the document.
    handler.forget();
    Ok(())
}
