//! Error types for path parsing and flattening.
//!
//! Both variants are recoverable: the lenient parser records
//! [`PathError::MalformedPathCommand`] and skips the command, and the flattener
//! downgrades a [`PathError::DegenerateArc`] to a straight segment.

use thiserror::Error;

/// Problems found while reading or flattening path data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A command letter was unknown, or its arguments were missing or garbled.
    #[error("Malformed path command '{command}' at offset {offset}: {reason}")]
    MalformedPathCommand {
        /// Byte offset of the command letter (or stray character) in the input.
        offset: usize,
        /// The command letter, or the stray character that was found instead.
        command: char,
        /// Human readable explanation.
        reason: String,
    },

    /// An elliptical arc that cannot be center-parameterized.
    #[error("Degenerate arc ending at ({x}, {y}): {reason}")]
    DegenerateArc { x: f64, y: f64, reason: String },
}

/// Result type alias for path operations.
pub type PathResult<T> = Result<T, PathError>;
