// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod ask;
pub mod errors;
pub mod http_server;

pub use ask::{ask_handler, AskRequest, MAX_QUESTION_CHARS};
pub use errors::ApiError;
pub use http_server::{create_app, start_server, AppState, HealthResponse};
