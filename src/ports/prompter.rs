//! Text prompt port definition.

use crate::domain::AppError;

/// Port for collecting the four-cell answer from the user.
pub trait Prompter {
    /// Ask for text. Returns `None` when the user cancels.
    fn prompt_text(&self, message: &str, example: &str) -> Result<Option<String>, AppError>;
}
