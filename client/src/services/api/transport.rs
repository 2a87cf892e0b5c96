//! # reqwest Transport
//!
//! Production [`HttpTransport`]: one HTTP call per request, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::core::service::{HttpMethod, HttpTransport, OutgoingRequest, RawResponse};

/// HTTP transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport. `timeout` of `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<RawResponse> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        builder = builder.header(CONTENT_TYPE, "application/json");
        if let Some(token) = &request.authorization {
            builder = builder.header(AUTHORIZATION, token.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body).map_err(|e| {
                AppError::Validation(format!("Request body is not serializable: {}", e))
            })?);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Transport(format!("Request timed out: {}", e))
            } else {
                AppError::Transport(format!("Network error: {}", e))
            }
        })?;

        let http_status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;

        let body: Value = serde_json::from_slice(&bytes)?;
        Ok(RawResponse { http_status, body })
    }
}
