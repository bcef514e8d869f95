//! Construction of the `run-for-cell` request URL.

use url::Url;

use crate::domain::{CellRequest, PROMPT_SHEET};

/// Route on the service that generates a form for one job cell.
pub const RUN_FOR_CELL_PATH: &str = "run-for-cell";

/// Build the request URL by plain concatenation.
///
/// Cell references go out exactly as the user typed them (after trimming); only
/// the prompt sheet name is percent-encoded.
pub fn build_run_url(base_url: &Url, request: &CellRequest) -> String {
    let base = base_url.as_str().trim_end_matches('/');
    format!(
        "{base}/{RUN_FOR_CELL_PATH}?cell={}&prompt_questions_cell={}&prompt_typeform_cell={}&prompt_sheet={}",
        request.job_cell,
        request.prompt_questions_cell,
        request.prompt_typeform_cell,
        urlencoding::encode(PROMPT_SHEET),
    )
}
