pub mod cell_address;
pub mod cell_request;
pub mod config;
pub mod error;
pub mod form_link;
pub mod run_url;

pub use cell_address::CellAddress;
pub use cell_request::{CellRequest, INPUT_EXAMPLE, PROMPT_SHEET};
pub use config::{EndpointConfig, FormlinkConfig, LogConfig, SheetConfig};
pub use error::AppError;
pub use form_link::{FORM_URL_FIELD, FormLinkWritten, extract_form_url};
pub use run_url::build_run_url;
