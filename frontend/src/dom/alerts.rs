//! Banner rendering and auto-dismissal.

use gloo_timers::callback::Timeout;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::registry;
use crate::config;
use crate::services::bootstrap;
use crate::types::{AlertKind, UiError, UiResult};

/// Build and insert a dismissible banner as the first child of the main
/// content container.
///
/// Message and icon are separate text/element nodes; user-controlled
/// strings never reach any markup path.
pub fn show_alert(message: &str, kind: AlertKind) {
    if let Err(e) = try_show_alert(message, kind) {
        log::warn!("Could not display {} alert: {}", kind, e);
    }
}

fn try_show_alert(message: &str, kind: AlertKind) -> UiResult<()> {
    let document = document();
    let container = document
        .query_selector(config::ALERT_CONTAINER_SELECTOR)
        .map_err(UiError::from_js)?
        .ok_or_else(|| UiError::Dom("page has no alert container".to_string()))?;

    let banner = document.create_element("div").map_err(UiError::from_js)?;
    banner.set_class_name(&format!(
        "alert {} alert-dismissible fade show",
        kind.css_class()
    ));

    let icon = document.create_element("i").map_err(UiError::from_js)?;
    icon.set_class_name(&format!("fas fa-{}", kind.icon()));

    let text = document.create_text_node(&format!(" {}", message));

    let close = document.create_element("button").map_err(UiError::from_js)?;
    close.set_attribute("type", "button").map_err(UiError::from_js)?;
    close.set_class_name("btn-close");
    close
        .set_attribute("data-bs-dismiss", "alert")
        .map_err(UiError::from_js)?;

    banner.append_child(&icon).map_err(UiError::from_js)?;
    banner.append_child(&text).map_err(UiError::from_js)?;
    banner.append_child(&close).map_err(UiError::from_js)?;

    container
        .insert_before(&banner, container.first_child().as_ref())
        .map_err(UiError::from_js)?;

    schedule_dismiss(banner, config::ALERT_DISMISS_MS);
    Ok(())
}

/// Track `banner` and close it after `delay_ms`.
fn schedule_dismiss(banner: Element, delay_ms: u32) {
    let id = registry::next_id();
    let element = banner.clone();
    let timer = Timeout::new(delay_ms, move || {
        registry::untrack_alert(id);
        if let Err(e) = bootstrap::close_alert(&element) {
            log::warn!("Could not close alert: {}", e);
        }
    });
    registry::track_alert(id, banner, Some(timer));
}

/// Apply the auto-dismiss policy to banners the server rendered into the
/// page: success closes after 3 s, error after 5 s, info stays.
pub fn auto_dismiss_existing() -> UiResult<()> {
    let list = document()
        .query_selector_all(".alert:not(.alert-info)")
        .map_err(UiError::from_js)?;

    for index in 0..list.length() {
        let element = match list.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            Some(element) => element,
            None => continue,
        };

        let classes = element.class_list();
        if classes.contains("alert-success") {
            schedule_dismiss(element, config::ALERT_DISMISS_MS);
        } else if classes.contains("alert-danger") {
            schedule_dismiss(element, config::ERROR_DISMISS_MS);
        }
    }
    Ok(())
}

/// Close every banner with an active dismissal handle: all tracked ones,
/// plus any banner the UI library already holds an instance for.
pub fn dismiss_all() {
    for element in registry::drain_alerts() {
        if let Err(e) = bootstrap::close_alert(&element) {
            log::warn!("Could not close alert: {}", e);
        }
    }

    let list = match document().query_selector_all(".alert") {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Could not enumerate alerts: {:?}", e);
            return;
        }
    };
    for index in 0..list.length() {
        if let Some(element) = list.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            if let Err(e) = bootstrap::close_alert_instance(&element) {
                log::warn!("Could not close alert: {}", e);
            }
        }
    }
}
