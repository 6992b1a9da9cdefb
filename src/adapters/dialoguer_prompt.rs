use std::io::{self, IsTerminal};

use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::ConfirmationPrompt;

/// Interactive yes/no prompt on the controlling terminal. Defaults to "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompt;

impl ConfirmationPrompt for DialoguerPrompt {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        // dialoguer draws on stderr and reads keys from the tty.
        if !io::stderr().is_terminal() || !io::stdin().is_terminal() {
            return Err(AppError::config_error("not a terminal"));
        }

        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|err| AppError::config_error(err.to_string()))
    }
}
