// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Section retrieval with structured-first, full-parse fallback
//!
//! ```text
//! TryStructured ──200 + sections──▶ Done(Structured)
//!       │
//!       └─ error / non-200 / no sections ─▶ TryHtmlFallback ──ok──▶ Done(HtmlFallback)
//!                                                 └─ error ─▶ RetrievalError
//! ```

use tracing::{debug, warn};

use super::config::WikiConfig;
use super::extract::structured::locate_sections;
use super::transport::WikiTransport;
use super::types::{RetrievalError, SectionPayload};

/// Retrieval states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetrievalState {
    TryStructured,
    TryHtmlFallback,
}

/// Retrieve sectioned content for an article
///
/// The structured endpoint failing is never an error by itself; only a
/// failure of the full-parse fallback propagates.
pub async fn retrieve_sections(
    transport: &dyn WikiTransport,
    config: &WikiConfig,
    title: &str,
) -> Result<SectionPayload, RetrievalError> {
    let mut state = RetrievalState::TryStructured;

    loop {
        match state {
            RetrievalState::TryStructured => {
                match fetch_structured(transport, config, title).await {
                    Ok(Some(payload)) => return Ok(payload),
                    Ok(None) => {
                        debug!("Structured sections for '{}' are empty, using parse", title);
                    }
                    Err(e) => {
                        warn!("Structured sections failed for '{}': {}, using parse", title, e);
                    }
                }
                state = RetrievalState::TryHtmlFallback;
            }
            RetrievalState::TryHtmlFallback => {
                return fetch_parse(transport, config, title).await;
            }
        }
    }
}

/// Mobile-sections request; `Ok(None)` when the body exposes no section list
async fn fetch_structured(
    transport: &dyn WikiTransport,
    config: &WikiConfig,
    title: &str,
) -> Result<Option<SectionPayload>, RetrievalError> {
    let url = config.rest_page_url("mobile-sections", title)?;
    let body = transport.get_json(&url).await?;

    if locate_sections(&body).is_empty() {
        return Ok(None);
    }
    Ok(Some(SectionPayload::Structured(body)))
}

/// Full page parse via the action API
async fn fetch_parse(
    transport: &dyn WikiTransport,
    config: &WikiConfig,
    title: &str,
) -> Result<SectionPayload, RetrievalError> {
    let url = config.action_url(&[
        ("action", "parse"),
        ("page", title),
        ("prop", "text|sections"),
        ("format", "json"),
    ])?;
    let body = transport.get_json(&url).await?;
    Ok(SectionPayload::HtmlFallback(body))
}
