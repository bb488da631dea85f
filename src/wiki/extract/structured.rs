// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction from mobile-sections JSON

use serde_json::Value;

use super::{heading_matches, SectionExtractor};
use crate::wiki::text::{first_n_sentences, strip_markup};
use crate::wiki::types::SectionText;

/// Locations that may hold the section list, in probe order
const SECTION_LOCATIONS: &[&[&str]] = &[&["sections"], &["remaining", "sections"], &["lead", "sections"]];

/// Heading fields, preferred first
const HEADING_FIELDS: &[&str] = &["line", "anchor", "section"];

/// Body fields, preferred first
const BODY_FIELDS: &[&str] = &["html", "text", "content"];

/// First non-empty section list found at a known location
///
/// Returns an empty slice when no location holds a non-empty array.
pub fn locate_sections(body: &Value) -> &[Value] {
    SECTION_LOCATIONS
        .iter()
        .filter_map(|path| {
            path.iter()
                .try_fold(body, |node, key| node.get(*key))
                .and_then(Value::as_array)
        })
        .find(|sections| !sections.is_empty())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn first_string<'a>(section: &'a Value, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| section.get(*field).and_then(Value::as_str))
        .find(|value| !value.trim().is_empty())
}

/// Keyed-lookup extractor for structured payloads
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredSectionExtractor;

impl SectionExtractor for StructuredSectionExtractor {
    fn extract(&self, payload: &Value, synonyms: &[&str], sentences: usize) -> SectionText {
        let mut results = SectionText::new();

        for section in locate_sections(payload) {
            let (Some(heading), Some(body)) = (
                first_string(section, HEADING_FIELDS),
                first_string(section, BODY_FIELDS),
            ) else {
                continue;
            };

            for synonym in synonyms {
                if results.contains_key(*synonym) || !heading_matches(heading, synonym) {
                    continue;
                }
                let text = first_n_sentences(&strip_markup(body), sentences);
                if !text.is_empty() {
                    results.insert(synonym.to_string(), text);
                }
            }
        }

        results
    }

    fn name(&self) -> &'static str {
        "structured"
    }
}
