//! Confirmation prompt capability.
//!
//! # Responsibility
//! - Provide the yes/no confirmation the view must obtain before clearing
//!   the whole list.
//!
//! The capability is a trait so the command loop can be tested with a
//! scripted double instead of a real terminal.

use std::io::{self, Write};

/// Boolean confirmation capability supplied by the host terminal.
pub trait ConfirmPrompt {
    /// Asks the user a yes/no question; `true` means proceed.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Terminal-backed prompt reading one answer line from stdin.
///
/// Anything other than an explicit `y`/`yes` counts as a refusal, including
/// read failures.
pub struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
