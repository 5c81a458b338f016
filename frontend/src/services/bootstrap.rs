//! Wrapper for the Bootstrap component library loaded by the pages.
//!
//! The library is treated as an opaque capability offering exactly two
//! operations: tooltip activation and alert dismissal. Exceptions thrown
//! on the JS side are caught at this boundary and surfaced as
//! [`UiError::Interop`].

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::types::{UiError, UiResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Tooltip", catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;

    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Alert", catch)]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &Alert) -> Result<(), JsValue>;

    #[wasm_bindgen(static_method_of = Alert, js_namespace = bootstrap, js_name = getInstance, catch)]
    fn get_instance(element: &Element) -> Result<Option<Alert>, JsValue>;
}

fn interop_err(value: JsValue) -> UiError {
    UiError::Interop(format!("{:?}", value))
}

/// Activate a tooltip on `element`.
///
/// Bootstrap keeps the instance alive internally; the handle itself is
/// not needed afterwards.
pub fn attach_tooltip(element: &Element) -> UiResult<()> {
    Tooltip::new(element).map(|_| ()).map_err(interop_err)
}

/// Dismiss an alert element through the library's construct-and-close flow.
pub fn close_alert(element: &Element) -> UiResult<()> {
    Alert::new(element).map_err(interop_err)?.close().map_err(interop_err)
}

/// Dismiss `element` only if the library already holds an instance for it.
///
/// Returns whether anything was closed.
pub fn close_alert_instance(element: &Element) -> UiResult<bool> {
    match Alert::get_instance(element).map_err(interop_err)? {
        Some(alert) => {
            alert.close().map_err(interop_err)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
