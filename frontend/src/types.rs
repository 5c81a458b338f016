//! Common types used across the UI layer.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across the controller and the DOM bindings.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Alert Types
// =============================================================================

/// Visual category of a notification banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    /// Operation completed.
    Success,
    /// User-correctable failure. Shares styling with the "danger" category.
    Error,
    /// Non-blocking caution.
    Warning,
    /// Neutral information.
    Info,
}

impl AlertKind {
    /// Bootstrap contextual class for this kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Error => "alert-danger",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
        }
    }

    /// Font Awesome icon name for this kind.
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "check-circle",
            AlertKind::Error | AlertKind::Warning => "exclamation-triangle",
            AlertKind::Info => "info-circle",
        }
    }

    /// Parse a kind from a loose string, as received from page scripts.
    ///
    /// Unknown values fall back to [`AlertKind::Info`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => AlertKind::Success,
            "error" | "danger" => AlertKind::Error,
            "warning" => AlertKind::Warning,
            _ => AlertKind::Info,
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// Gate Types
// =============================================================================

/// Form field a gate decision can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Free-text display name.
    Name,
    /// Integer credit balance.
    Credits,
}

impl Field {
    /// `name` attribute of the corresponding input element.
    pub fn input_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Credits => "credits",
        }
    }
}

/// Synchronous outcome of gating a submission or navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Let the browser's native action proceed.
    Proceed,
    /// Cancel the action, surface `message` and focus `field`.
    Block { field: Field, message: String },
    /// The user refused an interactive confirmation. Cancel with no
    /// other observable effect.
    Declined,
}

/// Typed snapshot of a form at submission time.
///
/// Extracted by the DOM layer; the controller never touches elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormView {
    /// Resolved form action URL.
    pub action: String,
    /// Raw value of the `name` input, if the form has one.
    pub name: Option<String>,
    /// Raw value of the `credits` input, if the form has one.
    pub credits: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while wiring or driving the page.
///
/// Handlers are the recovery boundary: they log and return, nothing
/// propagates into the browser's default handler.
#[derive(Debug, Error)]
pub enum UiError {
    /// A DOM query, cast or mutation failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Local storage was unavailable or rejected the operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The Bootstrap interop boundary failed.
    #[error("Interop error: {0}")]
    Interop(String),
}

impl UiError {
    /// Wrap an opaque JS exception as a DOM error.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        UiError::Dom(format!("{:?}", value))
    }
}

/// Result type for UI wiring operations.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_shares_danger_styling() {
        assert_eq!(AlertKind::Error.css_class(), "alert-danger");
        assert_eq!(AlertKind::from_name("danger"), AlertKind::Error);
    }

    #[test]
    fn test_unknown_kind_falls_back_to_info() {
        assert_eq!(AlertKind::from_name("verbose"), AlertKind::Info);
        assert_eq!(AlertKind::from_name(""), AlertKind::Info);
    }

    #[test]
    fn test_icon_mapping() {
        assert_eq!(AlertKind::Success.icon(), "check-circle");
        assert_eq!(AlertKind::Warning.icon(), AlertKind::Error.icon());
    }
}
