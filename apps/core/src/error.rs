use std::io;
use thiserror::Error;

/// Crate-wide error type, consolidating every failure outside the analytics engine into a single enum.
///
/// The analytics functions themselves are total and never produce one of these.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors (e.g., reading documents).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents a document that was recognised but could not be decoded.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Represents a document whose format is not handled.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Represents a failed exchange with the remote language model.
    #[error("Model error: {0}")]
    Model(String),

    /// Represents a model answer that does not have the expected shape.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// Represents data validation errors (e.g., empty input text).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparseable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl AppError {
    /// Whether this error came from the model path, where callers fall back to deterministic results.
    pub fn is_model_failure(&self) -> bool {
        matches!(
            self,
            AppError::Model(_) | AppError::MalformedResponse(_) | AppError::Timeout(_)
        )
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err))
        } else {
            AppError::Model(format!("HTTP error: {}", err))
        }
    }
}
