mod cell_store;
mod prompter;
mod run_endpoint;

pub use cell_store::CellStore;
pub use prompter::Prompter;
pub use run_endpoint::{EndpointResponse, RunEndpoint};
