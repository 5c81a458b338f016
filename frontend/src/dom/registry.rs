//! Handle registries for timers and dismissible banners.
//!
//! A retained [`Timeout`] cancels when dropped, so ownership here is the
//! cancellation mechanism: submit-reset timers are dropped in bulk when
//! the document unloads, alert timers when their banner goes away first.

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use web_sys::Element;

struct PendingReset {
    id: u64,
    _timer: Timeout,
}

struct AlertHandle {
    id: u64,
    element: Element,
    _timer: Option<Timeout>,
}

thread_local! {
    static NEXT_ID: Cell<u64> = const { Cell::new(1) };
    static SUBMIT_RESETS: RefCell<Vec<PendingReset>> = const { RefCell::new(Vec::new()) };
    static ALERTS: RefCell<Vec<AlertHandle>> = const { RefCell::new(Vec::new()) };
}

/// Fresh handle id, unique within this document.
pub fn next_id() -> u64 {
    NEXT_ID.with(|cell| {
        let id = cell.get();
        cell.set(id + 1);
        id
    })
}

/// Retain the fallback reset timer of one submission attempt.
pub fn track_reset(id: u64, timer: Timeout) {
    SUBMIT_RESETS.with(|resets| {
        resets.borrow_mut().push(PendingReset { id, _timer: timer });
    });
}

/// Drop a reset handle, typically from inside the fired timer itself.
pub fn untrack_reset(id: u64) {
    SUBMIT_RESETS.with(|resets| {
        resets.borrow_mut().retain(|reset| reset.id != id);
    });
}

/// Cancel every pending reset. Called when the document goes away, so a
/// stale re-enable cannot race the page replacement.
pub fn cancel_pending_resets() {
    SUBMIT_RESETS.with(|resets| {
        resets.borrow_mut().clear();
    });
}

/// Track a banner with an active dismissal handle.
pub fn track_alert(id: u64, element: Element, timer: Option<Timeout>) {
    ALERTS.with(|alerts| {
        alerts.borrow_mut().push(AlertHandle {
            id,
            element,
            _timer: timer,
        });
    });
}

/// Drop a banner handle after it was dismissed through any path.
pub fn untrack_alert(id: u64) {
    ALERTS.with(|alerts| {
        alerts.borrow_mut().retain(|alert| alert.id != id);
    });
}

/// Remove every tracked banner handle, cancelling pending auto-dismiss
/// timers, and hand the elements back for closing.
pub fn drain_alerts() -> Vec<Element> {
    ALERTS.with(|alerts| {
        alerts
            .borrow_mut()
            .drain(..)
            .map(|handle| handle.element)
            .collect()
    })
}
