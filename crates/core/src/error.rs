//! Error types for lineprompt.
//!
//! This module defines a unified error enum covering every failure a prompt
//! can produce (empty input, rejected answers, bad selections, I/O) along
//! with the configuration and serialization errors of the ambient stack.

use thiserror::Error;

/// Unified error type for lineprompt.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// Prompt operations never retry on their own; every variant is handed back
/// to the caller, who decides whether to re-prompt.
#[derive(Error, Debug)]
pub enum AppError {
    /// No text was entered and there was no default to fall back on
    #[error("no input provided")]
    EmptyInput,

    /// The validator rejected the answer; carries the validator's message
    #[error("{0}")]
    ValidationFailed(String),

    /// Selection input was not a number or not a listed position
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// `select` was called without any choices
    #[error("the list of choices must not be empty")]
    EmptyChoiceList,

    /// Reading from the input source or writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Whether asking the same question again can recover from this error.
    ///
    /// Operator mistakes (nothing typed, rejected answer, bad selection) are
    /// retryable. An empty choice list is a programming error and I/O
    /// failures need a fresh input source, so neither is.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::EmptyInput | AppError::ValidationFailed(_) | AppError::InvalidSelection(_)
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
