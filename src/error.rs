//! Error types for the calculator session.

use thiserror::Error;

/// Main error type for session operations.
///
/// Malformed input lines are not errors: the interpreter answers them with
/// an error message and keeps going. Only collaborator and configuration
/// failures surface here.
#[derive(Debug, Error)]
pub enum SumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input exhausted")]
    InputExhausted,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SumError>;
