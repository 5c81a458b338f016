//! Confirmation gating for submissions and navigations.

use crate::rules::{self, LinkAction};
use crate::types::{FormView, Gate};

use super::validate::validate;

/// Interactive yes/no dialog capability.
///
/// Production wires this to the browser-native dialog; tests inject a
/// scripted double. `true` means the user accepted.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Time-slot token of a link target: its final non-empty path segment.
pub fn slot_token(href: &str) -> &str {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(href)
}

/// Gate a link navigation against the confirmation table.
///
/// Links outside the table proceed untouched. Declining the dialog yields
/// [`Gate::Declined`] and nothing else happens, however often retried.
pub fn gate_navigation(href: &str, prompt: &dyn ConfirmPrompt) -> Gate {
    let Some(action) = rules::link_action(href) else {
        return Gate::Proceed;
    };

    let slot = slot_token(href);
    let message = match action {
        LinkAction::Reserve => reserve_message(slot),
        LinkAction::Cancel => cancel_message(slot),
    };

    if prompt.confirm(&message) {
        Gate::Proceed
    } else {
        Gate::Declined
    }
}

/// Gate a form submission.
///
/// Operator forms ask for confirmation *before* validation runs, echoing
/// the entered values back for review. A decline short-circuits with no
/// side effects; otherwise the rule table decides.
pub fn gate_submission(view: &FormView, prompt: &dyn ConfirmPrompt) -> Gate {
    if rules::is_admin_action(&view.action) {
        let message = admin_message(
            view.name.as_deref().unwrap_or(""),
            view.credits.as_deref().unwrap_or(""),
        );
        if !prompt.confirm(&message) {
            return Gate::Declined;
        }
    }
    validate(view)
}

fn reserve_message(slot: &str) -> String {
    format!(
        "Confirma a reserva para o horário {}?\n\nSerá descontado 1 crédito da sua conta.",
        slot
    )
}

fn cancel_message(slot: &str) -> String {
    format!(
        "Tem certeza que deseja cancelar sua reserva para {}?\n\nO crédito será reembolsado.",
        slot
    )
}

fn admin_message(name: &str, credits: &str) -> String {
    format!(
        "Confirma o cadastro do aluno?\n\nNome: {}\nCréditos: {}",
        name, credits
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::types::Field;

    /// Scripted dialog double: fixed answer, records every message.
    struct ScriptedPrompt {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        fn new(answer: bool) -> Self {
            ScriptedPrompt {
                answer,
                asked: RefCell::new(Vec::new()),
            }
        }

        fn messages(&self) -> Vec<String> {
            self.asked.borrow().clone()
        }
    }

    impl ConfirmPrompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    fn admin_view(name: &str, credits: &str) -> FormView {
        FormView {
            action: "https://clube.example/admin".to_string(),
            name: Some(name.to_string()),
            credits: Some(credits.to_string()),
        }
    }

    #[test]
    fn test_slot_token_is_final_segment() {
        assert_eq!(
            slot_token("https://clube.example/checkin/18:00-20:00"),
            "18:00-20:00"
        );
        assert_eq!(slot_token("/cancelar/20:00-22:00/"), "20:00-22:00");
    }

    #[test]
    fn test_declined_reservation_is_suppressed() {
        let prompt = ScriptedPrompt::new(false);
        let href = "https://clube.example/checkin/18:00-20:00";

        assert_eq!(gate_navigation(href, &prompt), Gate::Declined);

        let messages = prompt.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("18:00-20:00"));
        assert!(messages[0].contains("1 crédito"));
    }

    #[test]
    fn test_accepted_reservation_proceeds() {
        let prompt = ScriptedPrompt::new(true);
        let href = "https://clube.example/checkin/18:00-20:00";
        assert_eq!(gate_navigation(href, &prompt), Gate::Proceed);
    }

    #[test]
    fn test_cancellation_message_mentions_refund() {
        let prompt = ScriptedPrompt::new(true);
        gate_navigation("https://clube.example/cancelar/20:00-22:00", &prompt);

        let messages = prompt.messages();
        assert!(messages[0].contains("20:00-22:00"));
        assert!(messages[0].contains("reembolsado"));
    }

    #[test]
    fn test_plain_links_skip_the_dialog() {
        let prompt = ScriptedPrompt::new(false);
        assert_eq!(
            gate_navigation("https://clube.example/logout", &prompt),
            Gate::Proceed
        );
        assert!(prompt.messages().is_empty());
    }

    #[test]
    fn test_decline_is_idempotent() {
        let prompt = ScriptedPrompt::new(false);
        let href = "https://clube.example/cancelar/18:00-20:00";

        assert_eq!(gate_navigation(href, &prompt), Gate::Declined);
        assert_eq!(gate_navigation(href, &prompt), Gate::Declined);
        assert_eq!(prompt.messages().len(), 2);
    }

    #[test]
    fn test_admin_confirmation_runs_before_validation() {
        // Name is invalid, yet a decline must win: no validation alert.
        let prompt = ScriptedPrompt::new(false);
        let gate = gate_submission(&admin_view("x", "5"), &prompt);

        assert_eq!(gate, Gate::Declined);
        assert_eq!(prompt.messages().len(), 1);
    }

    #[test]
    fn test_admin_message_echoes_entered_values() {
        let prompt = ScriptedPrompt::new(true);
        gate_submission(&admin_view("Maria Silva", "12"), &prompt);

        let messages = prompt.messages();
        assert!(messages[0].contains("Maria Silva"));
        assert!(messages[0].contains("12"));
    }

    #[test]
    fn test_accepted_admin_form_still_validates() {
        let prompt = ScriptedPrompt::new(true);
        match gate_submission(&admin_view("x", "5"), &prompt) {
            Gate::Block { field, .. } => assert_eq!(field, Field::Name),
            other => panic!("expected Block, got {:?}", other),
        }
    }

    #[test]
    fn test_ordinary_forms_skip_the_dialog() {
        let prompt = ScriptedPrompt::new(false);
        let view = FormView {
            action: "https://clube.example/usuario".to_string(),
            name: Some("Maria".to_string()),
            credits: None,
        };

        assert_eq!(gate_submission(&view, &prompt), Gate::Proceed);
        assert!(prompt.messages().is_empty());
    }
}
