// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for encyclopedia question answering

use std::env;
use std::fmt;
use url::Url;

use super::types::RetrievalError;

pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_REST_BASE: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki";
pub const DEFAULT_USER_AGENT: &str = "medwiki-qa/0.1 (hospital knowledge assistant)";

/// Canonical answer categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Symptoms,
    Causes,
    Treatment,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Symptoms => "symptoms",
            Category::Causes => "causes",
            Category::Treatment => "treatment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category -> heading synonyms, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMap {
    entries: Vec<(Category, Vec<String>)>,
}

impl HeadingMap {
    pub fn new(entries: Vec<(Category, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Synonyms for a category; empty when the category is not mapped
    pub fn synonyms(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, synonyms)| synonyms.as_slice())
            .unwrap_or(&[])
    }

    /// Every synonym across all categories, in table order
    pub fn all_synonyms(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|(_, synonyms)| synonyms.iter().map(String::as_str))
            .collect()
    }
}

impl Default for HeadingMap {
    fn default() -> Self {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self::new(vec![
            (Category::Symptoms, list(&["Symptoms", "Signs and symptoms"])),
            (Category::Causes, list(&["Cause", "Causes"])),
            (
                Category::Treatment,
                list(&["Treatment", "Management", "Medication", "Medications"]),
            ),
        ])
    }
}

/// Immutable configuration injected into the pipeline
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// Action API endpoint (search and parse)
    pub api_url: String,
    /// REST API base (summary and mobile-sections)
    pub rest_base: String,
    /// Article path used to synthesize source URLs
    pub article_base_url: String,
    /// Identifying client header sent on every request
    pub user_agent: String,
    /// Per-call timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Search result cap
    pub search_limit: usize,
    /// Sentences kept from the lead extract
    pub answer_sentences: usize,
    /// Sentences kept from each matched section
    pub section_sentences: usize,
    /// Heading synonym table
    pub headings: HeadingMap,
}

impl WikiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("WIKI_API_URL").unwrap_or(defaults.api_url),
            rest_base: env::var("WIKI_REST_BASE").unwrap_or(defaults.rest_base),
            article_base_url: env::var("WIKI_ARTICLE_BASE_URL")
                .unwrap_or(defaults.article_base_url),
            user_agent: env::var("WIKI_USER_AGENT").unwrap_or(defaults.user_agent),
            request_timeout_ms: env::var("WIKI_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            ..defaults
        }
    }

    /// Point every endpoint at one host, as a test server would
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            api_url: format!("{}/w/api.php", base),
            rest_base: format!("{}/api/rest_v1", base),
            ..Self::default()
        }
    }

    /// Action API URL with the given query parameters
    pub fn action_url(&self, params: &[(&str, &str)]) -> Result<Url, RetrievalError> {
        let mut url = parse_base(&self.api_url)?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    /// REST page URL, e.g. `{rest_base}/page/summary/{title}` with the title
    /// escaped as a single path segment
    pub fn rest_page_url(&self, endpoint: &str, title: &str) -> Result<Url, RetrievalError> {
        append_segments(&self.rest_base, &["page", endpoint, title])
    }

    /// Public article URL for a title
    pub fn article_url(&self, title: &str) -> Result<Url, RetrievalError> {
        append_segments(&self.article_base_url, &[title])
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("api_url", &self.api_url),
            ("rest_base", &self.rest_base),
            ("article_base_url", &self.article_base_url),
        ] {
            if Url::parse(value).is_err() {
                return Err(format!("{} is not a valid URL: '{}'", name, value));
            }
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.request_timeout_ms == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        if self.search_limit == 0 {
            return Err("search_limit must be at least 1".to_string());
        }
        if self.answer_sentences == 0 || self.section_sentences == 0 {
            return Err("Sentence counts must be at least 1".to_string());
        }
        Ok(())
    }
}

fn parse_base(base: &str) -> Result<Url, RetrievalError> {
    Url::parse(base).map_err(|e| RetrievalError::Transport {
        url: base.to_string(),
        message: format!("Invalid base URL: {}", e),
    })
}

fn append_segments(base: &str, segments: &[&str]) -> Result<Url, RetrievalError> {
    let mut url = parse_base(base)?;
    url.path_segments_mut()
        .map_err(|_| RetrievalError::Transport {
            url: base.to_string(),
            message: "Base URL cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            rest_base: DEFAULT_REST_BASE.to_string(),
            article_base_url: DEFAULT_ARTICLE_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_ms: 10000,
            search_limit: 1,
            answer_sentences: 5,
            section_sentences: 2,
            headings: HeadingMap::default(),
        }
    }
}
