// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod version;
pub mod wiki;

// Re-export main types
pub use api::{create_app, AppState};
pub use wiki::{
    AnswerResult, ErrorResult, QaOutcome, RetrievalError, WikiConfig, WikiQaService,
    WikiTransport,
};
