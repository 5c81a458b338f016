//! Field validation against the declarative rule table.

use crate::rules::{FieldKind, FieldRule, FIELD_RULES};
use crate::types::{Field, FormView, Gate};

/// Check the submitted values against every rule in the table.
///
/// A rule only applies when the form actually carries the field. The first
/// violation wins; its message and field drive the notification and focus
/// handling in the binding layer.
pub fn validate(view: &FormView) -> Gate {
    for rule in FIELD_RULES {
        if let Some(raw) = field_value(view, rule.field) {
            if !satisfies(&rule.kind, raw) {
                return Gate::Block {
                    field: rule.field,
                    message: violation_message(rule),
                };
            }
        }
    }
    Gate::Proceed
}

fn field_value<'a>(view: &'a FormView, field: Field) -> Option<&'a str> {
    match field {
        Field::Name => view.name.as_deref(),
        Field::Credits => view.credits.as_deref(),
    }
}

fn satisfies(kind: &FieldKind, raw: &str) -> bool {
    match *kind {
        FieldKind::MinLen(min) => raw.trim().chars().count() >= min,
        FieldKind::IntRange { min, max } => raw
            .trim()
            .parse::<i32>()
            .map(|value| value >= min && value <= max)
            .unwrap_or(false),
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Nome",
        Field::Credits => "Créditos",
    }
}

fn violation_message(rule: &FieldRule) -> String {
    match rule.kind {
        FieldKind::MinLen(min) => format!(
            "{} deve ter pelo menos {} caracteres",
            field_label(rule.field),
            min
        ),
        FieldKind::IntRange { min, max } => format!(
            "{} deve ser um número entre {} e {}",
            field_label(rule.field),
            min,
            max
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(name: Option<&str>, credits: Option<&str>) -> FormView {
        FormView {
            action: "https://clube.example/usuario".to_string(),
            name: name.map(str::to_string),
            credits: credits.map(str::to_string),
        }
    }

    fn blocked_field(gate: Gate) -> Field {
        match gate {
            Gate::Block { field, .. } => field,
            other => panic!("expected Block, got {:?}", other),
        }
    }

    #[test]
    fn test_short_name_is_blocked() {
        let gate = validate(&view(Some("a"), None));
        assert_eq!(blocked_field(gate), Field::Name);
    }

    #[test]
    fn test_whitespace_padding_does_not_count() {
        let gate = validate(&view(Some("  a  "), None));
        assert_eq!(blocked_field(gate), Field::Name);
    }

    #[test]
    fn test_two_character_name_passes() {
        assert_eq!(validate(&view(Some("Jo"), None)), Gate::Proceed);
    }

    #[test]
    fn test_form_without_gated_fields_passes() {
        assert_eq!(validate(&view(None, None)), Gate::Proceed);
    }

    #[test]
    fn test_credits_bounds() {
        assert_eq!(validate(&view(Some("Maria"), Some("0"))), Gate::Proceed);
        assert_eq!(validate(&view(Some("Maria"), Some("20"))), Gate::Proceed);
        assert_eq!(
            blocked_field(validate(&view(Some("Maria"), Some("-1")))),
            Field::Credits
        );
        assert_eq!(
            blocked_field(validate(&view(Some("Maria"), Some("21")))),
            Field::Credits
        );
    }

    #[test]
    fn test_non_numeric_credits_are_blocked() {
        assert_eq!(
            blocked_field(validate(&view(Some("Maria"), Some("dez")))),
            Field::Credits
        );
        assert_eq!(
            blocked_field(validate(&view(Some("Maria"), Some("")))),
            Field::Credits
        );
    }

    #[test]
    fn test_padded_numeric_credits_pass() {
        assert_eq!(validate(&view(Some("Maria"), Some(" 7 "))), Gate::Proceed);
    }

    #[test]
    fn test_name_rule_is_checked_before_credits() {
        let gate = validate(&view(Some("x"), Some("99")));
        assert_eq!(blocked_field(gate), Field::Name);
    }

    #[test]
    fn test_messages_name_the_constraint() {
        match validate(&view(Some("x"), None)) {
            Gate::Block { message, .. } => assert!(message.contains("pelo menos 2")),
            other => panic!("expected Block, got {:?}", other),
        }
        match validate(&view(None, Some("99"))) {
            Gate::Block { message, .. } => assert!(message.contains("entre 0 e 20")),
            other => panic!("expected Block, got {:?}", other),
        }
    }
}
