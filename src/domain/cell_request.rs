//! Parsing of the four-cell prompt answer.

use crate::domain::{AppError, CellAddress};

/// Sheet holding the GPT instructions, always sent to the service.
pub const PROMPT_SHEET: &str = "gpt instruction";

/// Example answer shown in the prompt.
pub const INPUT_EXAMPLE: &str = "C4,B7,B6,H4";

/// Number of comma-separated parameters the prompt answer must carry.
const PARAMETER_COUNT: usize = 4;

/// Cell references collected from the user for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRequest {
    /// Cell holding the job description (passed to the service verbatim).
    pub job_cell: String,
    /// Cell holding the question-generation prompt (verbatim).
    pub prompt_questions_cell: String,
    /// Cell holding the form-generation prompt (verbatim).
    pub prompt_typeform_cell: String,
    /// Local cell that receives the form link.
    pub output_cell: CellAddress,
}

impl CellRequest {
    /// Parse `job,questions,typeform,output`. Tokens past the fourth are ignored.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let malformed = || AppError::MalformedInput { found: input.to_string() };

        let parts: Vec<&str> = input.split(',').collect();
        if parts.len() < PARAMETER_COUNT {
            return Err(malformed());
        }

        let tokens: Vec<&str> = parts[..PARAMETER_COUNT].iter().map(|p| p.trim()).collect();
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(malformed());
        }

        Ok(Self {
            job_cell: tokens[0].to_string(),
            prompt_questions_cell: tokens[1].to_string(),
            prompt_typeform_cell: tokens[2].to_string(),
            output_cell: CellAddress::parse(tokens[3])?,
        })
    }
}
