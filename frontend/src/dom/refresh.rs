//! Cosmetic slot-status refresh cue.
//!
//! The user panel has no status endpoint to call, so the periodic cue only
//! signals that a check happened: badges dim briefly and recover. No data
//! is fetched or re-rendered.

use gloo_timers::callback::{Interval, Timeout};
use gloo_utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config;
use crate::types::{UiError, UiResult};

/// Start the periodic badge pulse when the user panel is open.
pub fn start_if_user_panel() -> UiResult<()> {
    let path = window().location().pathname().map_err(UiError::from_js)?;
    if !path.contains(config::USER_PANEL_PATH) {
        return Ok(());
    }

    let interval = Interval::new(config::REFRESH_INTERVAL_MS, pulse_badges);
    // Runs until the document unloads.
    interval.forget();

    log::info!("Status refresh cue armed ({}s)", config::REFRESH_INTERVAL_MS / 1000);
    Ok(())
}

/// Dim every status badge, restoring full opacity shortly after.
fn pulse_badges() {
    let list = match document().query_selector_all(config::STATUS_BADGE_SELECTOR) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Could not enumerate status badges: {:?}", e);
            return;
        }
    };

    for index in 0..list.length() {
        if let Some(badge) = list
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            if badge.style().set_property("opacity", "0.5").is_err() {
                continue;
            }
            let restore = badge.clone();
            Timeout::new(config::BADGE_PULSE_MS, move || {
                let _ = restore.style().set_property("opacity", "1");
            })
            .forget();
        }
    }
}
