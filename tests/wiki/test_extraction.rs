// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Section extraction tests through the public API
//!
//! These tests verify that:
//! - Structured and full-parse payloads of the same article agree
//! - A custom heading table drives which sections are pulled
//! - Condensed output is stable under re-normalization

use medwiki_qa::wiki::{
    extract_sections, first_n_sentences, strip_markup, Category, HeadingMap, SectionPayload,
    WikiConfig,
};
use serde_json::json;

fn structured_measles() -> SectionPayload {
    SectionPayload::Structured(json!({
        "lead": {"sections": [{"id": 0, "text": "<p>Measles is a disease.</p>"}]},
        "remaining": {"sections": [
            {"id": 1, "line": "Signs and symptoms", "text": "<p>Symptoms include <b>fever</b>, cough. A rash follows. It spreads.</p>"},
            {"id": 2, "line": "Cause", "text": "<p>The measles virus.<sup>[3]</sup> It is airborne.</p>"},
            {"id": 3, "line": "Treatment", "text": "<p>No specific treatment exists. Care is supportive.</p>"}
        ]}
    }))
}

fn parsed_measles() -> SectionPayload {
    SectionPayload::HtmlFallback(json!({
        "parse": {"title": "Measles", "text": {"*": r#"
            <p>Measles is a disease.</p>
            <h2><span class="mw-headline" id="Signs_and_symptoms">Signs and symptoms</span></h2>
            <p>Symptoms include <b>fever</b>, cough. A rash follows. It spreads.</p>
            <h2><span class="mw-headline" id="Cause">Cause</span></h2>
            <p>The measles virus.<sup>[3]</sup> It is airborne.</p>
            <h2><span class="mw-headline" id="Treatment">Treatment</span></h2>
            <p>No specific treatment exists. Care is supportive.</p>
        "#}}
    }))
}

#[test]
fn test_both_payload_shapes_agree() {
    let config = WikiConfig::default();
    let synonyms = config.headings.all_synonyms();

    let structured = extract_sections(&structured_measles(), &synonyms, 2);
    let parsed = extract_sections(&parsed_measles(), &synonyms, 2);

    assert_eq!(structured, parsed);
    assert_eq!(
        structured.get("Symptoms").map(String::as_str),
        Some("Symptoms include fever , cough. A rash follows.")
    );
    assert_eq!(
        structured.get("Cause").map(String::as_str),
        Some("The measles virus. It is airborne.")
    );
    assert_eq!(
        structured.get("Treatment").map(String::as_str),
        Some("No specific treatment exists. Care is supportive.")
    );
    assert!(!structured.contains_key("Causes"));
    assert!(!structured.contains_key("Management"));
}

#[test]
fn test_custom_heading_table() {
    let headings = HeadingMap::new(vec![
        (Category::Symptoms, vec!["Rash".to_string()]),
        (Category::Causes, vec!["Cause".to_string()]),
        (Category::Treatment, vec!["Prevention".to_string()]),
    ]);
    let synonyms = headings.all_synonyms();

    let result = extract_sections(&structured_measles(), &synonyms, 1);

    // "Rash" appears in a body, never in a heading
    assert!(!result.contains_key("Rash"));
    assert!(!result.contains_key("Prevention"));
    assert_eq!(result.get("Cause").map(String::as_str), Some("The measles virus."));
}

#[test]
fn test_condensed_sections_are_stable() {
    let config = WikiConfig::default();
    let synonyms = config.headings.all_synonyms();
    let result = extract_sections(&parsed_measles(), &synonyms, 2);

    for text in result.values() {
        assert_eq!(&first_n_sentences(&strip_markup(text), 2), text);
    }
}

#[test]
fn test_payload_without_sections_yields_nothing() {
    let config = WikiConfig::default();
    let synonyms = config.headings.all_synonyms();

    let empty_structured = SectionPayload::Structured(json!({"lead": {"sections": []}}));
    let empty_parse = SectionPayload::HtmlFallback(json!({"parse": {"text": {"*": ""}}}));

    assert!(extract_sections(&empty_structured, &synonyms, 2).is_empty());
    assert!(extract_sections(&empty_parse, &synonyms, 2).is_empty());
}
