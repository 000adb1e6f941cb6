//! Error types for puzzle export.

use thiserror::Error;

/// Errors that can occur while writing an export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested output format is not known.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
