// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction from `action=parse` rendered HTML
//!
//! Sections have no keys here: a heading is located by its text and its
//! body is the run of paragraphs that follows it, up to the next heading.

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use super::{heading_matches, SectionExtractor};
use crate::wiki::text::{element_text, first_n_sentences};
use crate::wiki::types::SectionText;

/// Heading levels that can open a section
const SECTION_HEADINGS: &str = "h2, h3, h4";

/// Wrapper class newer parser output puts around each heading
const HEADING_WRAPPER_CLASS: &str = "mw-heading";

/// Rendered HTML from a parse response
///
/// Accepts both `parse.text["*"]` and the `formatversion=2` plain string.
fn parse_html(payload: &Value) -> Option<&str> {
    let text = payload.get("parse")?.get("text")?;
    text.get("*")
        .and_then(Value::as_str)
        .or_else(|| text.as_str())
        .filter(|html| !html.trim().is_empty())
}

fn is_heading_element(element: &ElementRef<'_>) -> bool {
    matches!(element.value().name(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn is_heading_wrapper(element: &ElementRef<'_>) -> bool {
    element.value().name() == "div"
        && element
            .value()
            .classes()
            .any(|class| class == HEADING_WRAPPER_CLASS)
}

/// Element whose following siblings make up the section body
fn sibling_anchor<'a>(heading: ElementRef<'a>) -> ElementRef<'a> {
    heading
        .parent()
        .and_then(ElementRef::wrap)
        .filter(is_heading_wrapper)
        .unwrap_or(heading)
}

/// Text of the paragraphs between `heading` and the next heading
fn section_paragraphs(heading: ElementRef<'_>) -> Vec<String> {
    let mut paragraphs = Vec::new();

    for sibling in sibling_anchor(heading).next_siblings() {
        let Some(element) = ElementRef::wrap(sibling) else {
            continue;
        };
        if is_heading_element(&element) || is_heading_wrapper(&element) {
            break;
        }
        if element.value().name() == "p" {
            let text = element_text(&element);
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }

    paragraphs
}

/// Heading-scan extractor for full-parse payloads
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlSectionExtractor;

impl SectionExtractor for HtmlSectionExtractor {
    fn extract(&self, payload: &Value, synonyms: &[&str], sentences: usize) -> SectionText {
        let mut results = SectionText::new();

        let Some(html) = parse_html(payload) else {
            return results;
        };
        let Ok(selector) = Selector::parse(SECTION_HEADINGS) else {
            return results;
        };
        let document = Html::parse_fragment(html);

        for synonym in synonyms {
            let found = document
                .select(&selector)
                .find(|heading| heading_matches(&element_text(heading), synonym));

            let Some(heading) = found else {
                continue;
            };

            let text = first_n_sentences(&section_paragraphs(heading).join(" "), sentences);
            if !text.is_empty() {
                results.insert(synonym.to_string(), text);
            }
        }

        results
    }

    fn name(&self) -> &'static str {
        "html_fallback"
    }
}
