//! Blocking dialogs
//!
//! Confirmation before destructive actions and alerts for failed
//! user-triggered mutations.

use std::io::{BufRead, Write};

pub trait Dialog: Send + Sync {
    /// Ask the user to confirm; `false` aborts the action.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to acknowledge
    fn alert(&self, message: &str);
}

/// Dialogs on the controlling terminal
#[derive(Debug, Clone, Default)]
pub struct TerminalDialog {
    assume_yes: bool,
}

impl TerminalDialog {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Dialog for TerminalDialog {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let mut stdout = std::io::stdout();
        if write!(stdout, "{message} [y/N] ").and_then(|_| stdout.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(TerminalDialog::new(true).confirm("Mark service request #1 as completed?"));
    }
}
