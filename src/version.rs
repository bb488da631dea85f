// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the medwiki-qa service

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-wiki-qa-2026-10-16";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-16";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "article-resolution",
    "summary-extract",
    "structured-sections",
    "parse-fallback",
    "section-condensation",
];
