// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Ask API endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::AskRequest;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::wiki::QaOutcome;

/// POST /v1/ask - Answer a medical question from the encyclopedia
///
/// # Request
/// - `question`: Free-text question (required, max 500 chars)
/// - `requestId`: Optional request ID for tracking
///
/// # Response
/// Either the answer
/// `{title, answer, symptoms, causes, treatment, source}` or
/// `{error: "No article found for query."}`; both with 200.
///
/// # Errors
/// - 400 Bad Request: Empty or oversized question
/// - 502 Bad Gateway: Search or summary request failed
/// - 504 Gateway Timeout: Search or summary request timed out
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<QaOutcome>, ApiError> {
    debug!("Ask request {:?}: {:?}", request.request_id, request.question);

    if let Err(e) = request.validate() {
        warn!("Ask validation failed: {}", e);
        return Err(ApiError::InvalidRequest(e));
    }

    let outcome = state
        .qa_service
        .answer_question(request.question.trim())
        .await?;

    info!(
        "Ask complete for '{}' (found: {})",
        request.question,
        !outcome.is_not_found()
    );

    Ok(Json(outcome))
}
