use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter answering with text supplied up front (e.g. `--cells`).
#[derive(Debug, Clone)]
pub struct ArgumentPrompter {
    answer: String,
}

impl ArgumentPrompter {
    pub fn new(answer: impl Into<String>) -> Self {
        Self { answer: answer.into() }
    }
}

impl Prompter for ArgumentPrompter {
    fn prompt_text(&self, _message: &str, _example: &str) -> Result<Option<String>, AppError> {
        Ok(Some(self.answer.clone()))
    }
}
