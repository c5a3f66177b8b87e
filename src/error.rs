//! Domain-specific error types for inquiry-mind

use thiserror::Error;

/// Main error type for the inquiry-mind engines
#[derive(Error, Debug)]
pub enum InquiryMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for InquiryMindError {
    fn from(err: anyhow::Error) -> Self {
        InquiryMindError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InquiryMindError {
    fn from(err: serde_json::Error) -> Self {
        InquiryMindError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for inquiry-mind operations
pub type Result<T> = std::result::Result<T, InquiryMindError>;
