mod argument_prompter;
mod csv_sheet_store;
mod dialoguer_prompter;
mod memory_sheet_store;
mod run_endpoint_http;

pub use argument_prompter::ArgumentPrompter;
pub use csv_sheet_store::CsvSheetStore;
pub use dialoguer_prompter::DialoguerPrompter;
pub use memory_sheet_store::MemorySheetStore;
pub use run_endpoint_http::HttpRunEndpoint;
