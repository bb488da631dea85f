// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP transport for the encyclopedia service
//!
//! Every upstream call in the pipeline goes through [`WikiTransport`], so
//! tests can substitute an in-memory implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::config::WikiConfig;
use super::types::RetrievalError;

/// Fetches JSON documents from the encyclopedia service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WikiTransport: Send + Sync {
    /// GET `url` and decode the body as JSON
    ///
    /// # Errors
    /// Non-success statuses, timeouts and connection failures all map to a
    /// [`RetrievalError`]; no retries are attempted.
    async fn get_json(&self, url: &Url) -> Result<Value, RetrievalError>;

    /// Transport name for logging
    fn name(&self) -> &'static str {
        "http"
    }
}

/// reqwest-backed transport with a fixed timeout and identifying user agent
pub struct ReqwestTransport {
    client: Client,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Create a transport from configuration
    pub fn new(config: &WikiConfig) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RetrievalError::Transport {
                url: String::new(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            timeout_ms: config.request_timeout_ms,
        })
    }
}

#[async_trait]
impl WikiTransport for ReqwestTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, RetrievalError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_send_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::ApiError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(url, e))?;

        serde_json::from_str(&body).map_err(|e| RetrievalError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

impl ReqwestTransport {
    fn map_send_error(&self, url: &Url, e: reqwest::Error) -> RetrievalError {
        if e.is_timeout() {
            RetrievalError::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            RetrievalError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    }
}
