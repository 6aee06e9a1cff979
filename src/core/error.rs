//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`TubeStatsError`] which covers every failure tubestats can report.
//! It uses `thiserror` for ergonomic error definitions and includes constructor helpers for
//! the variants that carry context.
//!
//! # Public API
//! - [`TubeStatsError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, TubeStatsError>`
//!
//! # Error Categories
//! - **Selection**: the `--lines` value is not a comma separated list of letters
//! - **Configuration**: credentials missing, config directory unavailable
//! - **Upstream**: non-success HTTP status, transport failure, unparseable body
//! - **Contract**: a status record without a severity description

use thiserror::Error;

/// Longest upstream body excerpt kept in an error message
const BODY_EXCERPT_LIMIT: usize = 200;

/// Domain-specific error types for tubestats
#[derive(Error, Debug)]
pub enum TubeStatsError {
    // Selection errors
    #[error("Invalid line selection '{input}': use line names separated by commas, with no spaces (e.g. central,victoria)")]
    InvalidSelector { input: String },

    // Configuration errors
    #[error("Missing TfL credentials. Set TFL_APP_ID and TFL_API_KEY or run 'tubestats init --app-id <id> --api-key <key>'")]
    MissingCredentials,

    #[error("Could not determine the configuration directory")]
    ConfigDirectoryNotFound,

    // Upstream errors
    #[error("Upstream error: TfL API responded with HTTP {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Upstream error: request to TfL API failed: {0}")]
    UpstreamTransport(#[from] ureq::Error),

    #[error("Upstream error: unexpected response body from TfL API: {source}")]
    UpstreamBody { source: serde_json::Error },

    // Contract errors
    #[error("Malformed status record for line '{line}': {detail}")]
    MalformedRecord { line: String, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using TubeStatsError
pub type Result<T> = std::result::Result<T, TubeStatsError>;

impl TubeStatsError {
    /// Create an invalid selector error
    pub fn invalid_selector(input: impl Into<String>) -> Self {
        Self::InvalidSelector {
            input: input.into(),
        }
    }

    /// Create an upstream status error, keeping a bounded excerpt of the body
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = match message.char_indices().nth(BODY_EXCERPT_LIMIT) {
            Some((cut, _)) => format!("{}...", &message[..cut]),
            None => message,
        };
        Self::UpstreamStatus { status, message }
    }

    /// Create an upstream body error
    pub fn upstream_body(source: serde_json::Error) -> Self {
        Self::UpstreamBody { source }
    }

    /// Create a malformed record error
    pub fn malformed_record(line: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line: line.into(),
            detail: detail.into(),
        }
    }

    /// True for failures that originate at the TfL API rather than locally
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamStatus { .. } | Self::UpstreamTransport(_) | Self::UpstreamBody { .. }
        )
    }
}
