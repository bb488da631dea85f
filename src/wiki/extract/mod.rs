// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Section extraction
//!
//! Each retrieval path has its own extractor; the payload tag picks one.
//! Extraction is total: unexpected shapes produce fewer keys, never an error.

pub mod html;
pub mod structured;

use serde_json::Value;

pub use html::HtmlSectionExtractor;
pub use structured::StructuredSectionExtractor;

use super::types::{SectionPayload, SectionText};

/// Pulls condensed text for matching headings out of a retrieved payload
pub trait SectionExtractor: Send + Sync {
    /// Map each matched synonym to the first `sentences` sentences of its section
    ///
    /// Matching is a case-insensitive substring test of the synonym against
    /// the heading. This can over-match (a "Treatment of side effects"
    /// heading matches "Treatment"); the behavior is kept as is.
    fn extract(&self, payload: &Value, synonyms: &[&str], sentences: usize) -> SectionText;

    /// Extractor name for logging
    fn name(&self) -> &'static str;
}

/// Extractor for a payload's tag
pub fn extractor_for(payload: &SectionPayload) -> &'static dyn SectionExtractor {
    match payload {
        SectionPayload::Structured(_) => &StructuredSectionExtractor,
        SectionPayload::HtmlFallback(_) => &HtmlSectionExtractor,
    }
}

/// Run the extractor matching the payload's tag
pub fn extract_sections(payload: &SectionPayload, synonyms: &[&str], sentences: usize) -> SectionText {
    extractor_for(payload).extract(payload.body(), synonyms, sentences)
}

/// Case-insensitive substring match used by both extractors
pub(crate) fn heading_matches(heading: &str, synonym: &str) -> bool {
    heading
        .trim()
        .to_lowercase()
        .contains(&synonym.to_lowercase())
}
