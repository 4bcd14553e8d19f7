// SPDX-FileCopyrightText: 2026 Atrium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Atrium dashboard server.

use thiserror::Error;

/// The primary error type used across Atrium crates.
#[derive(Debug, Error)]
pub enum AtriumError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Plugin manifest errors (unreadable file, invalid TOML, missing identity).
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Page resource errors (missing file, failed read). These never cross
    /// the resolver boundary: the resolver converts them into a not-found
    /// outcome before the listing service or the delivery layer can see them.
    #[error("resource error: {message}")]
    Resource {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HTTP server errors (bind failure, accept loop failure).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
