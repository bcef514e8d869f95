use std::io;

use thiserror::Error;

/// Library-wide error type for formlink operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration value failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Prompt answer did not contain four usable cell references.
    #[error(
        "Expected 4 comma-separated parameters (job_cell, prompt_questions_cell, prompt_typeform_cell, output_cell), got: '{found}'"
    )]
    MalformedInput { found: String },

    /// Cell address is not in A1 notation.
    #[error("Invalid cell address '{0}': expected column letters followed by a row number (e.g. H4)")]
    InvalidCellAddress(String),

    /// Transport-level failure while calling the run endpoint.
    #[error("Request failed:\n{0}")]
    RequestFailed(String),

    /// Endpoint answered with a non-success status (only when status rejection is enabled).
    #[error("Endpoint returned HTTP {status}:\n{body}")]
    HttpStatus { status: u16, body: String },

    /// Response body is not valid JSON.
    #[error("Failed to parse response: {details}\n{body}")]
    ResponseParse { details: String, body: String },

    /// Response parsed but carried no usable form link.
    #[error("Form link was not returned!\n{body}")]
    FormUrlMissing { body: String },

    /// Sheet file could not be read or written.
    #[error("Sheet error for '{path}': {details}")]
    Sheet { path: String, details: String },

    /// Interactive prompt failed.
    #[error("Failed to read input: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
