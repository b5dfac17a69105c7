// Rust guideline compliant 2026-02-06

//! Error types for the Film Checker core library.

use thiserror::Error;

/// Result type alias for Film Checker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Film Checker operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A remote source answered with a non-success status.
    #[error("{origin} source unavailable: HTTP {status}")]
    SourceUnavailable {
        /// Which source failed ("suggestion" or "detail").
        origin: &'static str,
        /// HTTP status code returned by the source.
        status: u16,
    },

    /// A remote source returned no usable payload.
    #[error("No data found: {0}")]
    NoData(String),

    /// The selected index is outside the offered choices.
    #[error("Invalid index {index}: expected 0..{len}")]
    InvalidSelection {
        /// Index entered by the user.
        index: i64,
        /// Number of choices that were offered.
        len: usize,
    },

    /// Identifier with an unsupported prefix.
    #[error("Unsupported identifier: {0}")]
    InvalidIdentifier(String),

    /// The GraphQL endpoint reported errors.
    #[error("GraphQL error: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
