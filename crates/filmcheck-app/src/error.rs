// Rust guideline compliant 2026-02-09

//! Error handling for Film Checker application services.

use filmcheck_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for JSON error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A remote source answered with a non-success status.
    SourceUnavailable,
    /// A remote source returned no usable payload.
    NoData,
    /// The selected index was out of range.
    InvalidSelection,
    /// The identifier prefix is not supported.
    InvalidIdentifier,
    /// The GraphQL endpoint reported errors.
    GraphqlError,
    /// Configuration could not be loaded or is invalid.
    ConfigError,
    /// The request included invalid inputs.
    InvalidInput,
    /// Transport failure talking to a remote source.
    HttpError,
    /// IO failure.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("{0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Transport error from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Http(_) => ErrorCode::HttpError,
            AppError::Core(core) => match core {
                CoreError::SourceUnavailable { .. } => ErrorCode::SourceUnavailable,
                CoreError::NoData(_) => ErrorCode::NoData,
                CoreError::InvalidSelection { .. } => ErrorCode::InvalidSelection,
                CoreError::InvalidIdentifier(_) => ErrorCode::InvalidIdentifier,
                CoreError::Graphql(_) => ErrorCode::GraphqlError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::SourceUnavailable { origin, status }) => {
                Some(serde_json::json!({ "source": origin, "status": status }))
            }
            AppError::Core(CoreError::InvalidSelection { index, len }) => {
                Some(serde_json::json!({ "index": index, "choices": len }))
            }
            AppError::Core(CoreError::Graphql(messages)) => {
                Some(serde_json::json!({ "messages": messages }))
            }
            _ => None,
        }
    }
}
