//! formlink: request a generated form for a job cell and write its link into a sheet.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{get_cell, load_config, run_for_cell, set_cell};
pub use app::config::ConfigOverrides;
pub use domain::{AppError, CellAddress, CellRequest, FormLinkWritten, FormlinkConfig};
