//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{ArgumentPrompter, CsvSheetStore, DialoguerPrompter, HttpRunEndpoint};
use crate::app::config::{self, ConfigOverrides};
use crate::app::{AppContext, commands};
use crate::domain::{CellAddress, FormLinkWritten, FormlinkConfig};
use crate::ports::{CellStore, Prompter};

pub use crate::domain::AppError;

/// Load configuration from `path` (or `./formlink.toml`) with overrides applied.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<FormlinkConfig, AppError> {
    config::load_config(path, overrides)
}

/// Run the form-link flow against the configured sheet.
///
/// With `cells` set, the prompt is answered from it instead of the terminal.
pub fn run_for_cell(
    config: &FormlinkConfig,
    cells: Option<&str>,
) -> Result<Option<FormLinkWritten>, AppError> {
    match cells {
        Some(answer) => run_with_prompter(config, ArgumentPrompter::new(answer)),
        None => run_with_prompter(config, DialoguerPrompter),
    }
}

fn run_with_prompter<P: Prompter>(
    config: &FormlinkConfig,
    prompter: P,
) -> Result<Option<FormLinkWritten>, AppError> {
    let endpoint = HttpRunEndpoint::new(&config.endpoint)?;
    let sheet = CsvSheetStore::new(&config.sheet.path);
    let ctx = AppContext::new(prompter, endpoint, sheet);

    commands::run_for_cell::execute(&ctx, &config.endpoint)
}

/// Read one cell of the configured sheet.
pub fn get_cell(config: &FormlinkConfig, address: &str) -> Result<Option<String>, AppError> {
    commands::cell::get(&sheet(config), address)
}

/// Write one cell of the configured sheet.
pub fn set_cell(
    config: &FormlinkConfig,
    address: &str,
    value: &str,
) -> Result<CellAddress, AppError> {
    commands::cell::set(&sheet(config), address, value)
}

fn sheet(config: &FormlinkConfig) -> impl CellStore {
    CsvSheetStore::new(&config.sheet.path)
}
