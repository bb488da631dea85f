// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for encyclopedia question answering

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Message returned when search yields no article
pub const NO_ARTICLE_FOUND: &str = "No article found for query.";

/// Lead text and canonical page URL for a resolved article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// Lead extract (empty when the upstream omits it)
    pub lead_extract: String,
    /// Desktop page URL, synthesized from the title when absent
    pub source_url: String,
}

/// Section content as returned by whichever retrieval path succeeded
///
/// The two shapes are not interchangeable: the tag decides which
/// extractor reads the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionPayload {
    /// JSON from the mobile-sections endpoint
    Structured(Value),
    /// JSON from `action=parse`, carrying rendered HTML
    HtmlFallback(Value),
}

impl SectionPayload {
    /// Raw JSON body regardless of tag
    pub fn body(&self) -> &Value {
        match self {
            SectionPayload::Structured(body) | SectionPayload::HtmlFallback(body) => body,
        }
    }

    /// Short tag used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            SectionPayload::Structured(_) => "structured",
            SectionPayload::HtmlFallback(_) => "html_fallback",
        }
    }
}

/// Matched heading synonym -> condensed section text
pub type SectionText = HashMap<String, String>;

/// Final answer for a question
///
/// Every field is always serialized; missing content is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub title: String,
    pub answer: String,
    pub symptoms: String,
    pub causes: String,
    pub treatment: String,
    pub source: String,
}

/// Error-shaped result body, e.g. `{"error": "No article found for query."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn no_article_found() -> Self {
        Self::new(NO_ARTICLE_FOUND)
    }
}

/// Outcome of a question: an answer, or the defined not-found shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QaOutcome {
    Answer(AnswerResult),
    NotFound(ErrorResult),
}

impl QaOutcome {
    pub fn answer(&self) -> Option<&AnswerResult> {
        match self {
            QaOutcome::Answer(answer) => Some(answer),
            QaOutcome::NotFound(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QaOutcome::NotFound(_))
    }
}

/// Failures talking to the encyclopedia service
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Request exceeded the per-call timeout
    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout {
        /// Requested URL
        url: String,
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// Upstream answered with a non-success status
    #[error("Encyclopedia API error: {status} for {url}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Connection-level failure
    #[error("Transport error for {url}: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },

    /// Body could not be decoded as JSON
    #[error("Invalid JSON from {url}: {message}")]
    Decode {
        /// Requested URL
        url: String,
        /// Parser error message
        message: String,
    },
}

impl RetrievalError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RetrievalError::Timeout { .. })
    }
}
