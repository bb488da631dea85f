// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Markup stripping and sentence condensation
//!
//! Pure functions shared by both section extractors and the answer composer.

use regex::Regex;
use scraper::{ElementRef, Html, Node};
use std::sync::LazyLock;

/// Elements whose whole subtree is dropped (reference markers, infoboxes, inline code)
const NOISE_TAGS: &[&str] = &["sup", "table", "style", "script"];

/// Sentence terminator followed by whitespace; the split happens after the
/// punctuation so it stays attached to the preceding sentence.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence regex is valid"));

/// Extract visible text from an HTML fragment
///
/// Noise subtrees are removed, text nodes are joined with a single space and
/// all whitespace runs are collapsed. Malformed markup is parsed leniently,
/// so this never fails.
pub fn strip_markup(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut parts = Vec::new();
    collect_text(&fragment.root_element(), &mut parts);
    collapse_whitespace(&parts.join(" "))
}

/// Visible text of an already-parsed element, with the same rules as [`strip_markup`]
pub fn element_text(element: &ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_text(element, &mut parts);
    collapse_whitespace(&parts.join(" "))
}

fn collect_text<'a>(element: &ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
            Node::Element(el) => {
                if NOISE_TAGS.contains(&el.name()) {
                    continue;
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(&child_ref, parts);
                }
            }
            _ => {}
        }
    }
}

/// Collapse whitespace runs (newlines and tabs included) to one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep the first `n` sentences of `text`
///
/// Empty fragments are dropped; fewer than `n` sentences returns all of them.
pub fn first_n_sentences(text: &str, n: usize) -> String {
    split_sentences(text)
        .into_iter()
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into trimmed, non-empty sentences
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // terminators are ASCII, so start + 1 is a char boundary
        push_fragment(&mut sentences, &text[start..m.start() + 1]);
        start = m.end();
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn push_fragment<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment);
    }
}
