//! Operator confirmation port.

use crate::domain::AppError;

/// Asks the operator a yes/no question and blocks until answered.
pub trait ConfirmationPrompt {
    fn confirm(&self, question: &str) -> Result<bool, AppError>;
}
