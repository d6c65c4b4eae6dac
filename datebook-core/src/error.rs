//! Error types for datebook.

use thiserror::Error;

/// Errors that can occur in datebook operations.
#[derive(Error, Debug)]
pub enum DatebookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for datebook operations.
pub type DatebookResult<T> = Result<T, DatebookError>;
