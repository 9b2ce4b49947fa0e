//! # Confirmation Service
//!
//! Synchronous yes/no gate in front of destructive commands. Injected
//! so the controller stays testable without a real UI.

use std::io::{self, BufRead, Write};

/// Blocking "are you sure" prompt. Returning `false` aborts the command
/// with no state change and no request sent.
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Interactive prompt on stderr/stdin for the command-line binary.
pub struct StdinConfirmationPrompt;

impl ConfirmationPrompt for StdinConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Fixed-answer prompt for non-interactive use.
pub struct AutoConfirm {
    answer: bool,
}

impl AutoConfirm {
    pub fn accepting() -> Self {
        Self { answer: true }
    }

    pub fn declining() -> Self {
        Self { answer: false }
    }
}

impl ConfirmationPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_confirm_should_answer_as_configured() {
        assert!(AutoConfirm::accepting().confirm("delete?"));
        assert!(!AutoConfirm::declining().confirm("delete?"));
    }

    #[test]
    fn auto_confirm_should_be_usable_as_trait_object() {
        let prompt: Box<dyn ConfirmationPrompt> = Box::new(AutoConfirm::accepting());
        assert!(prompt.confirm("proceed?"));
    }
}
