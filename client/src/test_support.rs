//! Scripted transport shared by unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::core::error::Result;
use crate::core::service::{HttpTransport, OutgoingRequest, RawResponse};
use crate::services::api::ApiClient;
use crate::services::session::SessionStore;

pub const TEST_BASE_URL: &str = "http://api.test";

type Handler = Box<dyn Fn(&OutgoingRequest) -> Result<RawResponse> + Send + Sync>;

/// Answers every request with `handler` and records what was sent.
pub struct MockTransport {
    handler: Handler,
    requests: Mutex<Vec<OutgoingRequest>>,
}

impl MockTransport {
    pub fn new(
        handler: impl Fn(&OutgoingRequest) -> Result<RawResponse> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<OutgoingRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse> {
        let response = (self.handler)(&request);
        self.requests.lock().push(request);
        response
    }
}

/// A `200` response with `body`.
pub fn respond(body: Value) -> Result<RawResponse> {
    Ok(RawResponse::ok(body))
}

/// Client against [`TEST_BASE_URL`] with an in-memory session.
pub fn api_with(transport: Arc<MockTransport>, token: Option<&str>) -> ApiClient {
    let session = SessionStore::in_memory();
    if let Some(token) = token {
        session.set(token);
    }
    ApiClient::new(TEST_BASE_URL, transport, session)
}
