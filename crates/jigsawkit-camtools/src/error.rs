//! Error types for puzzle generation.
//!
//! [`PuzzleError`] is fatal to a layout call and carries enough detail for a
//! human readable message. Parameter validation failures are wrapped in
//! [`ParameterError`].

use thiserror::Error;

/// Errors that abort a layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    /// Columns or rows (segments or rings) were zero.
    #[error("Invalid grid: {columns} x {rows} (both must be at least 1)")]
    InvalidGrid { columns: u32, rows: u32 },

    /// The form or piece style token is not recognized.
    #[error("Unsupported shape: '{0}'")]
    UnsupportedShape(String),

    /// Canvas size or margin leave nothing to draw on.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to puzzle parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for puzzle generation.
pub type PuzzleResult<T> = Result<T, PuzzleError>;
