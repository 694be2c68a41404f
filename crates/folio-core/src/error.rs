// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Folio portfolio assistant.

use thiserror::Error;

/// The primary error type used across all Folio adapter traits and core operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration errors (invalid TOML, missing credentials, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Completion provider errors (transport failure, auth, server error, bad payload).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote completion service reported that its rate limit was exceeded.
    ///
    /// Kept apart from [`FolioError::Provider`] so callers can map it to a
    /// user-facing "slow down" reply without inspecting message text.
    #[error("rate limited by provider: {message}")]
    RateLimited { message: String },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Asset download failures (missing file, unwritable destination).
    #[error("download error: {message}")]
    Download {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Outbound mail service errors. `status` is the HTTP status when the
    /// service answered at all.
    #[error("mail error: {message}")]
    Mail {
        message: String,
        status: Option<u16>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// User input rejected by validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Returns true when the error is a remote rate-limit signal.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, FolioError::RateLimited { .. })
    }
}
