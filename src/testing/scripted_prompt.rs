use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ConfirmationPrompt;

#[derive(Debug, Clone)]
pub struct ScriptedPrompt {
    answer: Option<bool>,
    questions: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer: Some(answer), questions: Arc::default() }
    }

    /// Prompt that fails as if no terminal were attached.
    pub fn erroring() -> Self {
        Self { answer: None, questions: Arc::default() }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer.ok_or_else(|| AppError::config_error("not a terminal"))
    }
}
