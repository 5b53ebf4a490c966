//! Error types for the HTTP layer
//!
//! Callers need to tell failure classes apart: a validation or signing
//! error means the request content must be fixed, a request error is a
//! candidate for retry at the application level, and a status or parse
//! error means the gateway itself rejected or mangled the exchange.

use nwl_core::ValidationError;
use nwl_sign::SignError;
use thiserror::Error;

/// Errors that can occur while sending a gateway request
#[derive(Debug, Error)]
pub enum TransportError {
    /// The network round-trip failed (connect, send, or body read)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway answered with a non-2xx status
    #[error("gateway returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The body could not be parsed as JSON for a kind that requires it
    #[error("failed to parse gateway response as JSON (HTTP {status}): {detail}")]
    Parse { status: u16, detail: String },

    /// The request content failed schema validation
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The credential key material has the wrong byte length
    #[error("signing error: {0}")]
    Sign(#[from] SignError),
}
