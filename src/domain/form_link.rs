//! Interpretation of the service response.

use serde_json::Value;

use crate::domain::{AppError, CellAddress};

/// JSON field carrying the generated form link.
pub const FORM_URL_FIELD: &str = "form_url";

/// Successful write-back of a form link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLinkWritten {
    pub cell: CellAddress,
    pub form_url: String,
}

/// Extract `form_url` from a raw response body.
///
/// A missing, null, non-string, or empty field is reported together with the
/// raw body so the user can see what the service actually said.
pub fn extract_form_url(body: &str) -> Result<String, AppError> {
    let json: Value = serde_json::from_str(body).map_err(|e| AppError::ResponseParse {
        details: e.to_string(),
        body: body.to_string(),
    })?;

    match json.get(FORM_URL_FIELD).and_then(Value::as_str) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(AppError::FormUrlMissing { body: body.to_string() }),
    }
}
