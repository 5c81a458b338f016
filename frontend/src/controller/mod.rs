//! Pure decision logic.
//!
//! Nothing in this module touches the DOM. The only capability crossing
//! the boundary is [`ConfirmPrompt`], the interactive yes/no dialog;
//! everything else is data in, [`crate::types::Gate`] out. That keeps the
//! whole gate unit-testable without a browser.
//!
//! # Submodules
//!
//! - [`validate`] - field validation against the rule table
//! - [`confirm`] - confirmation gating for submissions and navigations
//! - [`format`] - display formatting and clock decisions

mod confirm;
mod format;
mod validate;

pub use confirm::{gate_navigation, gate_submission, slot_token, ConfirmPrompt};
pub use format::{can_cancel, cancel_open_at, compose_title, format_time};
pub use validate::validate;
