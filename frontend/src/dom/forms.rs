//! Submission gating and optimistic busy state.

use gloo_timers::callback::Timeout;
use gloo_utils::document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::{alerts, registry, NativeConfirm};
use crate::config;
use crate::controller::gate_submission;
use crate::services::storage;
use crate::types::{AlertKind, Field, FormView, Gate, UiError, UiResult};

/// Attach the submission gate to every form on the page.
pub fn bind_all() -> UiResult<()> {
    let forms = document()
        .query_selector_all("form")
        .map_err(UiError::from_js)?;

    for index in 0..forms.length() {
        if let Some(form) = forms
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlFormElement>().ok())
        {
            bind(form)?;
        }
    }
    Ok(())
}

fn bind(form: HtmlFormElement) -> UiResult<()> {
    let target = form.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        on_submit(&target, &event);
    });
    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
        .map_err(UiError::from_js)?;
    // Listener lives for the lifetime of the document.
    handler.forget();
    Ok(())
}

fn on_submit(form: &HtmlFormElement, event: &Event) {
    let view = extract_view(form);
    match gate_submission(&view, &NativeConfirm) {
        Gate::Proceed => {
            remember_name(&view);
            if let Some(button) = submit_button(form) {
                enter_busy_state(button);
            }
        }
        Gate::Block { field, message } => {
            event.prevent_default();
            alerts::show_alert(&message, AlertKind::Error);
            focus_field(form, field);
        }
        Gate::Declined => {
            event.prevent_default();
        }
    }
}

fn extract_view(form: &HtmlFormElement) -> FormView {
    FormView {
        action: form.action(),
        name: field_value(form, Field::Name),
        credits: field_value(form, Field::Credits),
    }
}

fn field_input(form: &HtmlFormElement, field: Field) -> Option<HtmlInputElement> {
    let selector = format!("input[name=\"{}\"]", field.input_name());
    form.query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

fn field_value(form: &HtmlFormElement, field: Field) -> Option<String> {
    field_input(form, field).map(|input| input.value())
}

fn focus_field(form: &HtmlFormElement, field: Field) {
    if let Some(input) = field_input(form, field) {
        if let Err(e) = input.focus() {
            log::warn!("Could not focus '{}' field: {:?}", field.input_name(), e);
        }
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
}

/// Disable the control, swap in the busy label and arm the fallback reset.
///
/// The reset timer is owned by the registry and cancelled on `pagehide`,
/// so it only ever fires when the page stayed around.
fn enter_busy_state(button: HtmlButtonElement) {
    let original = button.text_content().unwrap_or_default();
    button.set_disabled(true);
    apply_busy_label(&button, config::BUSY_LABEL);

    let id = registry::next_id();
    let restore = button.clone();
    let timer = Timeout::new(config::SUBMIT_RESET_MS, move || {
        registry::untrack_reset(id);
        restore.set_text_content(Some(&original));
        restore.set_disabled(false);
    });
    registry::track_reset(id, timer);
}

/// Replace a button's content with a spinner and `label`.
///
/// Built from nodes, never from markup.
pub(crate) fn apply_busy_label(button: &HtmlElement, label: &str) {
    button.set_text_content(None);
    let document = document();
    if let Ok(spinner) = document.create_element("i") {
        spinner.set_class_name("fas fa-spinner fa-spin");
        if let Err(e) = button.append_child(&spinner) {
            log::warn!("Could not attach spinner: {:?}", e);
        }
    }
    let text = document.create_text_node(&format!(" {}", label));
    if let Err(e) = button.append_child(&text) {
        log::warn!("Could not attach busy label: {:?}", e);
    }
}

/// Cache the display name once the gate lets the submission through.
fn remember_name(view: &FormView) {
    if let Some(name) = view.name.as_deref() {
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            storage::set(config::LAST_NAME_KEY, trimmed);
        }
    }
}

/// Pre-fill the name field from the cached display name, if both exist.
pub fn prefill_name() {
    let saved: Option<String> = storage::get(config::LAST_NAME_KEY);
    if let Some(saved) = saved {
        if let Ok(Some(element)) = document().query_selector("input[name=\"name\"]") {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                input.set_value(&saved);
            }
        }
    }
}
