// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ask API request types

use serde::{Deserialize, Serialize};

/// Maximum accepted question length in characters
pub const MAX_QUESTION_CHARS: usize = 500;

/// Request body for POST /v1/ask
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    /// Free-text medical question (required, max 500 chars)
    #[serde(default)]
    pub question: String,

    /// Optional request ID for tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl AskRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("Question cannot be empty".to_string());
        }
        if self.question.chars().count() > MAX_QUESTION_CHARS {
            return Err(format!(
                "Question too long (max {} characters)",
                MAX_QUESTION_CHARS
            ));
        }
        Ok(())
    }
}
