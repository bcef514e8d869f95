//! Ask for four cells, request a form, write its link back.

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, CellRequest, EndpointConfig, FormLinkWritten, INPUT_EXAMPLE, build_run_url,
    extract_form_url,
};
use crate::ports::{CellStore, Prompter, RunEndpoint};

/// Prompt text shown before reading the four cell references.
pub const PROMPT_MESSAGE: &str = "Enter the parameters separated by commas:\n\
     job_cell, prompt_questions_cell, prompt_typeform_cell, output_cell";

/// Execute one run.
///
/// Returns `Ok(None)` when the user cancels. Every failure happens before the
/// sheet is touched, so an error never leaves a partial write behind.
pub fn execute<P, E, S>(
    ctx: &AppContext<P, E, S>,
    endpoint_config: &EndpointConfig,
) -> Result<Option<FormLinkWritten>, AppError>
where
    P: Prompter,
    E: RunEndpoint,
    S: CellStore,
{
    let Some(answer) = ctx.prompter().prompt_text(PROMPT_MESSAGE, INPUT_EXAMPLE)? else {
        debug!("prompt cancelled");
        return Ok(None);
    };

    let request = CellRequest::parse(&answer)?;
    debug!(?request, "parsed cell request");

    let url = build_run_url(&endpoint_config.base_url, &request);
    let response = ctx.endpoint().post(&url)?;

    if !response.is_success() {
        if endpoint_config.reject_error_status {
            return Err(AppError::HttpStatus { status: response.status, body: response.body });
        }
        // Status is not enforced; the body decides.
        warn!(status = response.status, "run-for-cell returned a non-success status");
    }

    let form_url = extract_form_url(&response.body)?;
    ctx.sheet().set(&request.output_cell, &form_url)?;
    info!(cell = %request.output_cell, %form_url, "form link written");

    Ok(Some(FormLinkWritten { cell: request.output_cell, form_url }))
}
