use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, FormlinkConfig};

#[derive(Subcommand)]
pub enum CellCommands {
    /// Print the value of a cell (nothing when empty)
    Get {
        /// Cell address, e.g. H4
        address: String,
    },
    /// Overwrite a cell
    Set {
        /// Cell address, e.g. H4
        address: String,
        /// New value
        value: String,
    },
}

pub(super) fn run_cell(config: &FormlinkConfig, command: CellCommands) -> Result<(), AppError> {
    match command {
        CellCommands::Get { address } => {
            if let Some(value) = api::get_cell(config, &address)? {
                println!("{}", value);
            }
        }
        CellCommands::Set { address, value } => {
            let address = api::set_cell(config, &address, &value)?;
            println!("✅ Updated {}", address);
        }
    }
    Ok(())
}
