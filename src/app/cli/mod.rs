//! CLI Adapter.

mod cell;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::config::ConfigOverrides;
use crate::app::logging::{self, LogHandle};
use crate::app::api;
use crate::domain::{AppError, FormlinkConfig};

#[derive(Parser)]
#[command(name = "formlink")]
#[command(version)]
#[command(
    about = "Request a generated form for a job cell and write its link into the sheet",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./formlink.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Sheet file (CSV, or TSV by extension) overriding [sheet].path
    #[arg(short, long, global = true)]
    sheet: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for the four cells, request a form, and write its link
    #[clap(visible_alias = "r")]
    Run {
        /// Answer the prompt non-interactively, e.g. "C4,B7,B6,H4"
        #[arg(long)]
        cells: Option<String>,
        /// Service base URL overriding config and FORMLINK_BASE_URL
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Read or write a single cell of the sheet
    #[clap(visible_alias = "c")]
    Cell {
        #[command(subcommand)]
        command: cell::CellCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let log_handle = logging::init();

    let endpoint = match &cli.command {
        Commands::Run { endpoint, .. } => endpoint.clone(),
        Commands::Cell { .. } => None,
    };
    let overrides =
        ConfigOverrides { base_url: endpoint, sheet_path: cli.sheet, ..ConfigOverrides::from_env() };

    let result = load_config(cli.config, &overrides, log_handle.as_ref()).and_then(|config| match cli.command {
        Commands::Run { cells, .. } => run::run_for_cell(&config, cells.as_deref()),
        Commands::Cell { command } => cell::run_cell(&config, command),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(
    path: Option<PathBuf>,
    overrides: &ConfigOverrides,
    log_handle: Option<&LogHandle>,
) -> Result<FormlinkConfig, AppError> {
    let config = api::load_config(path.as_deref(), overrides)?;
    if let Some(handle) = log_handle {
        handle.apply(&config.log);
    }
    Ok(config)
}
