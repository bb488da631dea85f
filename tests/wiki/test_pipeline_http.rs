// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end pipeline tests against the in-process mock upstream
//!
//! These tests verify that:
//! - A resolved article yields a condensed answer with all three sections
//! - Zero search hits return the not-found result without content requests
//! - A failing mobile-sections endpoint falls back to one full parse
//! - A slow summary surfaces as a timeout error

use super::mock_upstream::{self, UpstreamCounters};
use medwiki_qa::wiki::{QaOutcome, RetrievalError, WikiConfig, WikiQaService};

fn service_for(base_url: &str, timeout_ms: u64) -> WikiQaService {
    let mut config = WikiConfig::with_base(base_url);
    config.request_timeout_ms = timeout_ms;
    WikiQaService::new(config).expect("Failed to build service")
}

#[tokio::test]
async fn test_flu_question_answered_from_structured_sections() {
    let upstream = mock_upstream::start().await;
    let service = service_for(&upstream.base_url(), 5_000);

    let outcome = service
        .answer_question("what are the symptoms of flu")
        .await
        .expect("pipeline should succeed");

    let answer = outcome.answer().expect("expected an answer");
    assert_eq!(answer.title, "Influenza");
    assert_eq!(
        answer.answer,
        "Influenza, commonly known as the flu, is an infectious disease caused by influenza viruses. \
         Symptoms range from mild to severe. The most common symptoms include high fever and cough. \
         These symptoms begin one to four days after exposure. Most people recover within a week."
    );
    assert_eq!(
        answer.symptoms,
        "Symptoms include fever, cough and fatigue. Onset is sudden."
    );
    assert!(answer.causes.starts_with("Influenza is caused by"));
    assert!(answer.causes.ends_with("Four types exist."));
    assert_eq!(
        answer.treatment,
        "Rest and fluids are advised. Antivirals may help."
    );
    assert_eq!(answer.source, "https://en.wikipedia.org/wiki/Influenza");

    let counters = &upstream.counters;
    assert_eq!(UpstreamCounters::get(&counters.sections_calls), 1);
    assert_eq!(UpstreamCounters::get(&counters.parse_calls), 0);

    // search, summary and sections all identify the client
    let agents = counters.user_agents();
    assert_eq!(agents.len(), 3);
    assert!(agents.iter().all(|agent| agent == &service.config().user_agent));
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let upstream = mock_upstream::start().await;
    let mut config = WikiConfig::with_base(&upstream.base_url());
    config.user_agent = "ward-7-kiosk/2.0".to_string();
    let service = WikiQaService::new(config).unwrap();

    service.resolve_title("flu").await.unwrap();

    assert_eq!(upstream.counters.user_agents(), ["ward-7-kiosk/2.0"]);
}

#[tokio::test]
async fn test_unknown_query_returns_not_found() {
    let upstream = mock_upstream::start().await;
    let service = service_for(&upstream.base_url(), 5_000);

    let outcome = service.answer_question("xyzzy123").await.unwrap();

    assert!(outcome.is_not_found());
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({ "error": "No article found for query." })
    );

    let counters = &upstream.counters;
    assert_eq!(UpstreamCounters::get(&counters.search_calls), 1);
    assert_eq!(UpstreamCounters::get(&counters.summary_calls), 0);
    assert_eq!(UpstreamCounters::get(&counters.sections_calls), 0);
    assert_eq!(UpstreamCounters::get(&counters.parse_calls), 0);
}

#[tokio::test]
async fn test_missing_sections_fall_back_to_parse_once() {
    let upstream = mock_upstream::start().await;
    let service = service_for(&upstream.base_url(), 5_000);

    let outcome = service.answer_question("common cold").await.unwrap();

    let QaOutcome::Answer(answer) = outcome else {
        panic!("expected an answer");
    };
    assert_eq!(answer.title, "Common cold");
    assert_eq!(
        answer.answer,
        "The common cold is a viral infection of the upper respiratory tract."
    );
    assert_eq!(
        answer.symptoms,
        "Typical symptoms include cough, sore throat and runny nose. Fever may occur."
    );
    assert_eq!(
        answer.causes,
        "Rhinoviruses are the most common cause. Over 200 virus strains are implicated."
    );
    assert_eq!(answer.treatment, "There is no cure. Treatment is supportive.");
    // No content_urls in the summary, so the source is synthesized
    assert_eq!(answer.source, "https://en.wikipedia.org/wiki/Common%20cold");

    let counters = &upstream.counters;
    assert_eq!(UpstreamCounters::get(&counters.sections_calls), 1);
    assert_eq!(UpstreamCounters::get(&counters.parse_calls), 1);
}

#[tokio::test]
async fn test_slow_summary_times_out() {
    let upstream = mock_upstream::start().await;
    let service = service_for(&upstream.base_url(), 200);

    let err = service
        .answer_question("slow onset")
        .await
        .expect_err("summary should time out");

    assert!(err.is_timeout(), "unexpected error: {:?}", err);
    match err {
        RetrievalError::Timeout { timeout_ms, url } => {
            assert_eq!(timeout_ms, 200);
            assert!(url.contains("/page/summary/"));
        }
        other => panic!("expected timeout, got {:?}", other),
    }
    assert_eq!(UpstreamCounters::get(&upstream.counters.sections_calls), 0);
}

#[tokio::test]
async fn test_resolve_title_only_searches() {
    let upstream = mock_upstream::start().await;
    let service = service_for(&upstream.base_url(), 5_000);

    let title = service.resolve_title("flu shot").await.unwrap();

    assert_eq!(title.as_deref(), Some("Influenza"));
    assert_eq!(UpstreamCounters::get(&upstream.counters.summary_calls), 0);
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    // Bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = service_for(&format!("http://{}", addr), 2_000);
    let err = service.answer_question("flu").await.unwrap_err();

    assert!(matches!(err, RetrievalError::Transport { .. }), "got {:?}", err);
}
