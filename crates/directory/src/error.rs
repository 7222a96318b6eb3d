//! Error types for the directory crate.

use thiserror::Error;

/// Result type alias for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors that can occur while building or ingesting a directory.
///
/// Scoring and ranking are total over valid records and never fail.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A record's primary label is empty or whitespace-only
    #[error("primary label must not be empty")]
    EmptyPrimary,

    /// A directory collection violates a registry invariant
    #[error("invalid directory: {0}")]
    InvalidDirectory(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
