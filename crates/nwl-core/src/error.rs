//! Error types for NWL Core

use thiserror::Error;

/// Errors that can occur while validating request content
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("unsupported value for field '{field}': {reason}")]
    UnsupportedValue { field: String, reason: String },
}
