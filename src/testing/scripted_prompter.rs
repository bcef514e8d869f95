use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter returning a fixed answer (`None` = cancel) and recording what it was asked.
#[derive(Clone)]
pub struct ScriptedPrompter {
    answer: Option<String>,
    prompts: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedPrompter {
    pub fn new(answer: Option<&str>) -> Self {
        Self { answer: answer.map(str::to_string), prompts: Arc::new(Mutex::new(vec![])) }
    }

    /// `(message, example)` pairs in call order.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_text(&self, message: &str, example: &str) -> Result<Option<String>, AppError> {
        self.prompts.lock().unwrap().push((message.to_string(), example.to_string()));
        Ok(self.answer.clone())
    }
}
