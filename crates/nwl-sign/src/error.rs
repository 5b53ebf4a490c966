//! Error types for NWL Sign

use thiserror::Error;

/// Errors that can occur while signing a request
///
/// Key material lengths are measured in UTF-8 bytes, not characters;
/// multibyte characters count once per byte. Wrong lengths are never
/// truncated or padded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignError {
    #[error("hash key must be exactly {expected} bytes (UTF-8), got {actual}")]
    HashKeyLength { expected: usize, actual: usize },

    #[error("hash IV must be exactly {expected} bytes (UTF-8), got {actual}")]
    HashIvLength { expected: usize, actual: usize },
}
