use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Malformed or incomplete request body. The message is shown to the caller.
    #[error("{0}")]
    Validation(String),

    /// Invalid configuration (e.g. out-of-range temperature).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The model-backed path failed or answered outside the contract.
    #[error("Model error: {0}")]
    Model(String),

    /// The model call did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// A synthesized payload is missing required fields. Indicates a bug.
    #[error("Contract violation: {0}")]
    Contract(String),
}

impl AppError {
    /// Errors caused by the caller's input rather than by this crate
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// JSON error body returned to callers: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        let error = if err.is_client_error() {
            err.to_string()
        } else {
            "Internal Server Error".to_string()
        };
        Self { error }
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Model(format!("HTTP error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
