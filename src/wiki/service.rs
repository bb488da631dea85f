// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Question answering orchestration
//!
//! Resolves an article, fetches its summary and sections, and condenses
//! them into an [`AnswerResult`].

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::{Category, WikiConfig};
use super::extract::{extract_sections, extractor_for};
use super::resolver::resolve;
use super::sections::retrieve_sections;
use super::summary::fetch_summary;
use super::text::first_n_sentences;
use super::transport::{ReqwestTransport, WikiTransport};
use super::types::{AnswerResult, ErrorResult, QaOutcome, RetrievalError, SectionText};

/// Stateless question-answering service over the encyclopedia
///
/// Holds no per-request state; one instance serves concurrent callers.
pub struct WikiQaService {
    transport: Arc<dyn WikiTransport>,
    config: WikiConfig,
}

impl WikiQaService {
    /// Create a service using the reqwest transport
    pub fn new(config: WikiConfig) -> Result<Self, RetrievalError> {
        let transport = ReqwestTransport::new(&config)?;
        info!(
            "Encyclopedia QA service using {} transport ({}ms timeout)",
            transport.name(),
            config.request_timeout_ms
        );
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a service over a caller-supplied transport
    pub fn with_transport(config: WikiConfig, transport: Arc<dyn WikiTransport>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    /// Resolve a query to an article title without fetching content
    pub async fn resolve_title(&self, query: &str) -> Result<Option<String>, RetrievalError> {
        resolve(
            self.transport.as_ref(),
            &self.config,
            query,
            self.config.search_limit,
        )
        .await
    }

    /// Answer a free-text question
    ///
    /// Zero search hits yields [`QaOutcome::NotFound`] without any further
    /// requests. Section retrieval failures degrade to a summary-only answer.
    ///
    /// # Errors
    /// Only search and summary failures abort the request.
    pub async fn answer_question(&self, question: &str) -> Result<QaOutcome, RetrievalError> {
        let start = Instant::now();
        let transport = self.transport.as_ref();

        let Some(title) = self.resolve_title(question).await? else {
            info!("No article found for '{}'", question);
            return Ok(QaOutcome::NotFound(ErrorResult::no_article_found()));
        };

        let summary = fetch_summary(transport, &self.config, &title).await?;

        let sections = match retrieve_sections(transport, &self.config, &title).await {
            Ok(payload) => {
                debug!(
                    "Extracting sections for '{}' with {} extractor",
                    title,
                    extractor_for(&payload).name()
                );
                extract_sections(
                    &payload,
                    &self.config.headings.all_synonyms(),
                    self.config.section_sentences,
                )
            }
            Err(e) => {
                warn!(
                    "Section retrieval exhausted for '{}': {}, answering from summary only",
                    title, e
                );
                SectionText::new()
            }
        };

        let answer = AnswerResult {
            answer: first_n_sentences(&summary.lead_extract, self.config.answer_sentences),
            symptoms: self.pick(&sections, Category::Symptoms),
            causes: self.pick(&sections, Category::Causes),
            treatment: self.pick(&sections, Category::Treatment),
            source: summary.source_url,
            title,
        };

        info!(
            "Answered '{}' from '{}' in {}ms (symptoms: {}, causes: {}, treatment: {})",
            question,
            answer.title,
            start.elapsed().as_millis(),
            !answer.symptoms.is_empty(),
            !answer.causes.is_empty(),
            !answer.treatment.is_empty()
        );

        Ok(QaOutcome::Answer(answer))
    }

    /// First non-empty text among a category's synonyms, in priority order
    fn pick(&self, sections: &SectionText, category: Category) -> String {
        self.config
            .headings
            .synonyms(category)
            .iter()
            .filter_map(|synonym| sections.get(synonym))
            .find(|text| !text.is_empty())
            .cloned()
            .unwrap_or_default()
    }
}
