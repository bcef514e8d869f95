//! Run endpoint implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::{AppError, EndpointConfig};
use crate::ports::{EndpointResponse, RunEndpoint};

/// HTTP transport for the `run-for-cell` endpoint.
///
/// Performs exactly one request per call and hands back the body for any
/// status code; interpreting the status is left to the caller.
#[derive(Debug, Clone)]
pub struct HttpRunEndpoint {
    client: Client,
}

impl HttpRunEndpoint {
    /// Create a new client honoring the configured timeout.
    pub fn new(config: &EndpointConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::RequestFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl RunEndpoint for HttpRunEndpoint {
    fn post(&self, url: &str) -> Result<EndpointResponse, AppError> {
        debug!(%url, "POST run-for-cell");

        let response = self
            .client
            .post(url)
            .send()
            .map_err(|e| AppError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| AppError::RequestFailed(e.to_string()))?;
        debug!(status, body_len = body.len(), "run-for-cell responded");

        Ok(EndpointResponse { status, body })
    }
}
