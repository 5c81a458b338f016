//! Declarative gating rules.
//!
//! Forms and links are matched against small typed tables instead of
//! string checks scattered through the handlers. Adding a gated field or
//! a confirmed link pattern means adding a table row.

use crate::config;
use crate::types::Field;

// =============================================================================
// Field validation rules
// =============================================================================

/// Constraint applied to one named form field.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    /// Free text with a minimum trimmed length.
    MinLen(usize),
    /// Integer constrained to an inclusive range.
    IntRange { min: i32, max: i32 },
}

/// One row of the validation table.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    /// Field the rule applies to, when the form carries it.
    pub field: Field,
    /// Constraint checked against the raw input value.
    pub kind: FieldKind,
}

/// Validation table, checked in order on every gated submission.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Name,
        kind: FieldKind::MinLen(config::MIN_NAME_LEN),
    },
    FieldRule {
        field: Field::Credits,
        kind: FieldKind::IntRange {
            min: config::CREDITS_MIN,
            max: config::CREDITS_MAX,
        },
    },
];

// =============================================================================
// Link confirmation rules
// =============================================================================

/// Action a confirmed link performs on the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Reserve the slot named by the link, debiting one credit.
    Reserve,
    /// Cancel the reservation, refunding the credit.
    Cancel,
}

/// One row of the link confirmation table.
#[derive(Clone, Copy, Debug)]
pub struct LinkRule {
    /// Path segment identifying the endpoint.
    pub segment: &'static str,
    /// What following the link does.
    pub action: LinkAction,
}

/// Links that require confirmation before the browser may navigate.
pub const LINK_RULES: &[LinkRule] = &[
    LinkRule {
        segment: "/checkin/",
        action: LinkAction::Reserve,
    },
    LinkRule {
        segment: "/cancelar/",
        action: LinkAction::Cancel,
    },
];

/// Look up the confirmation action for a link target, if any.
pub fn link_action(href: &str) -> Option<LinkAction> {
    LINK_RULES
        .iter()
        .find(|rule| href.contains(rule.segment))
        .map(|rule| rule.action)
}

/// CSS selector matching the anchors governed by `rule`.
pub fn link_selector(rule: &LinkRule) -> String {
    format!("a[href*=\"{}\"]", rule.segment)
}

// =============================================================================
// Form patterns
// =============================================================================

/// Action-path marker of forms that need operator confirmation.
pub const ADMIN_ACTION_MARKER: &str = "admin";

/// Whether a form action targets an operator endpoint.
pub fn is_admin_action(action: &str) -> bool {
    action.contains(ADMIN_ACTION_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkin_href_maps_to_reserve() {
        assert_eq!(
            link_action("https://clube.example/checkin/18:00-20:00"),
            Some(LinkAction::Reserve)
        );
    }

    #[test]
    fn test_cancel_href_maps_to_cancel() {
        assert_eq!(
            link_action("https://clube.example/cancelar/20:00-22:00"),
            Some(LinkAction::Cancel)
        );
    }

    #[test]
    fn test_unrelated_href_needs_no_confirmation() {
        assert_eq!(link_action("https://clube.example/painel_usuario"), None);
        assert_eq!(link_action("/logout"), None);
    }

    #[test]
    fn test_admin_marker() {
        assert!(is_admin_action("https://clube.example/admin"));
        assert!(is_admin_action("/admin_login"));
        assert!(!is_admin_action("/usuario"));
    }

    #[test]
    fn test_link_selector_shape() {
        assert_eq!(link_selector(&LINK_RULES[0]), "a[href*=\"/checkin/\"]");
    }
}
