//! Interactive terminal prompt.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Blocking text prompt on the controlling terminal. Ctrl-C cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn prompt_text(&self, message: &str, example: &str) -> Result<Option<String>, AppError> {
        let prompt = format!("{}\nExample: {}", message, example);
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(Some(value)),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}
