//! Error types shared across the workspace

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The backing store rejected or failed an operation
    #[error("Store error: {0}")]
    Store(String),

    /// Caller supplied input the operation cannot act on
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Speech capture failed before producing a result
    #[error("Capture error: {0}")]
    Capture(String),
}

impl Error {
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether the error was caused by the caller rather than the backend
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result alias using the core [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
