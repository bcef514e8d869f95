use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{EndpointResponse, RunEndpoint};

#[derive(Clone)]
enum Reply {
    Response(EndpointResponse),
    Failure(String),
}

/// Endpoint double that records every URL it is asked to POST.
#[derive(Clone)]
pub struct FakeRunEndpoint {
    reply: Reply,
    requested_urls: Arc<Mutex<Vec<String>>>,
}

impl FakeRunEndpoint {
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(Reply::Response(EndpointResponse { status, body: body.into() }))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Failure(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self { reply, requested_urls: Arc::new(Mutex::new(vec![])) }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls.lock().unwrap().clone()
    }
}

impl RunEndpoint for FakeRunEndpoint {
    fn post(&self, url: &str) -> Result<EndpointResponse, AppError> {
        self.requested_urls.lock().unwrap().push(url.to_string());
        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Failure(message) => Err(AppError::RequestFailed(message.clone())),
        }
    }
}
