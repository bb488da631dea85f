// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use tracing::warn;

use crate::wiki::{ErrorResult, RetrievalError};

#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    Upstream(RetrievalError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Error-shaped body; upstream details stay in the logs
    pub fn to_response(&self) -> ErrorResult {
        match self {
            ApiError::InvalidRequest(msg) => ErrorResult::new(msg.clone()),
            ApiError::Upstream(e) if e.is_timeout() => {
                ErrorResult::new("Knowledge service timed out.")
            }
            ApiError::Upstream(_) => ErrorResult::new("Knowledge service unavailable."),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::Upstream(e) => write!(f, "Upstream failure: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RetrievalError> for ApiError {
    fn from(e: RetrievalError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Upstream(e) = &self {
            warn!("Answer failed upstream: {}", e);
        }
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
