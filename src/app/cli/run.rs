use crate::app::api;
use crate::domain::{AppError, FormlinkConfig};

pub(super) fn run_for_cell(config: &FormlinkConfig, cells: Option<&str>) -> Result<(), AppError> {
    match api::run_for_cell(config, cells)? {
        Some(written) => {
            println!("✅ Link written to {}:\n{}", written.cell, written.form_url);
        }
        None => println!("Cancelled."),
    }
    Ok(())
}
