// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lead summary retrieval from the REST summary endpoint

use serde::Deserialize;
use tracing::debug;

use super::config::WikiConfig;
use super::transport::WikiTransport;
use super::types::{RetrievalError, SummaryResult};

/// Fetch the lead extract and source URL for an article
///
/// A missing `extract` becomes an empty string; a missing desktop URL is
/// synthesized from the configured article path.
pub async fn fetch_summary(
    transport: &dyn WikiTransport,
    config: &WikiConfig,
    title: &str,
) -> Result<SummaryResult, RetrievalError> {
    let url = config.rest_page_url("summary", title)?;
    let body = transport.get_json(&url).await?;
    let summary: SummaryBody = serde_json::from_value(body).unwrap_or_default();

    let source_url = match summary.desktop_page() {
        Some(page) => page,
        None => config.article_url(title)?.to_string(),
    };

    debug!(
        "Summary for '{}': {} chars, source {}",
        title,
        summary.extract.as_deref().map(str::len).unwrap_or(0),
        source_url
    );

    Ok(SummaryResult {
        lead_extract: summary.extract.unwrap_or_default(),
        source_url,
    })
}

#[derive(Debug, Default, Deserialize)]
struct SummaryBody {
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    #[serde(default)]
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    #[serde(default)]
    page: Option<String>,
}

impl SummaryBody {
    fn desktop_page(&self) -> Option<String> {
        self.content_urls
            .as_ref()?
            .desktop
            .as_ref()?
            .page
            .clone()
            .filter(|page| !page.is_empty())
    }
}
