// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Encyclopedia-backed medical question answering
//!
//! Given a free-text question:
//! - resolves the best-matching article via search
//! - fetches its lead summary and canonical URL
//! - retrieves sectioned content (structured endpoint, full parse as fallback)
//! - condenses symptoms, causes and treatment sections to short answers
//!
//! Key features:
//! - Two extraction strategies selected by the retrieval path
//! - Graceful degradation when section content is unavailable
//! - Injectable transport and configuration for testing

pub mod config;
pub mod extract;
pub mod resolver;
pub mod sections;
pub mod service;
pub mod summary;
pub mod text;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use config::{Category, HeadingMap, WikiConfig};
pub use extract::{extract_sections, HtmlSectionExtractor, SectionExtractor, StructuredSectionExtractor};
pub use service::WikiQaService;
pub use text::{first_n_sentences, strip_markup};
pub use transport::{ReqwestTransport, WikiTransport};
pub use types::{
    AnswerResult, ErrorResult, QaOutcome, RetrievalError, SectionPayload, SectionText,
    SummaryResult, NO_ARTICLE_FOUND,
};
