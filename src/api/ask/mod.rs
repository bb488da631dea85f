// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Medical question endpoint
//!
//! Provides the `/v1/ask` HTTP endpoint backed by [`crate::wiki::WikiQaService`].

pub mod handler;
pub mod request;

pub use handler::ask_handler;
pub use request::{AskRequest, MAX_QUESTION_CHARS};
