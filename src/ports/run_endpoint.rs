//! Run endpoint port definition.

use crate::domain::AppError;

/// Raw reply from the service, returned for every HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port for the remote `run-for-cell` call.
pub trait RunEndpoint {
    /// POST to `url` with no body. Only transport faults are errors.
    fn post(&self, url: &str) -> Result<EndpointResponse, AppError>;
}
