// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article resolution via the action API search list

use serde::Deserialize;
use tracing::debug;

use super::config::WikiConfig;
use super::transport::WikiTransport;
use super::types::RetrievalError;

/// Resolve a free-text query to the top-ranked article title
///
/// Zero hits is a normal outcome and returns `Ok(None)`.
///
/// # Errors
/// Transport failures and non-success statuses propagate as [`RetrievalError`].
pub async fn resolve(
    transport: &dyn WikiTransport,
    config: &WikiConfig,
    query: &str,
    limit: usize,
) -> Result<Option<String>, RetrievalError> {
    let limit = limit.max(1).to_string();
    let url = config.action_url(&[
        ("action", "query"),
        ("list", "search"),
        ("srsearch", query),
        ("srlimit", limit.as_str()),
        ("format", "json"),
    ])?;

    let body = transport.get_json(&url).await?;
    let title = top_title(body);

    match &title {
        Some(title) => debug!("Resolved '{}' to article '{}'", query, title),
        None => debug!("No search hits for '{}'", query),
    }

    Ok(title)
}

#[derive(Debug, Default, Deserialize)]
struct SearchBody {
    #[serde(default)]
    query: SearchQuery,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: Option<String>,
}

/// `query.search[0].title`, ignoring unexpected shapes
fn top_title(body: serde_json::Value) -> Option<String> {
    let body: SearchBody = serde_json::from_value(body).unwrap_or_default();
    body.query
        .search
        .into_iter()
        .next()
        .and_then(|hit| hit.title)
        .filter(|title| !title.trim().is_empty())
}
