//! # NWL Core
//!
//! Core types and validation for the NewebPay logistics gateway.
//!
//! This crate provides:
//! - Protocol enums and constants (logistics type, shipping type, endpoints)
//! - The ordered field mapping consumed by the signing pipeline
//! - Request builders for the four gateway operations
//! - Declarative per-kind schema validation
//!
//! ## Example
//!
//! ```rust
//! use nwl_core::{LgsType, LogisticsRequest, MapRequest, ShipType};
//!
//! let request = MapRequest::new()
//!     .merchant_order_no("ORDER123")
//!     .lgs_type(LgsType::B2C)
//!     .ship_type(ShipType::SevenEleven)
//!     .return_url("https://example.com/return")
//!     .time_stamp(1234567890);
//!
//! request.validate().unwrap();
//! ```

pub mod credentials;
pub mod error;
pub mod fields;
pub mod request;
pub mod schema;
pub mod types;

// Re-exports for convenience
pub use credentials::Credentials;
pub use error::ValidationError;
pub use fields::{FieldMap, FieldValue};
pub use request::{
    CreateOrderRequest, LogisticsRequest, MapRequest, PrintOrderRequest, QueryOrderRequest,
};
pub use schema::{rules_for, validate_fields, violations, Check, FieldRule, Violation};
pub use types::{
    Environment, LgsType, RequestKind, RespondType, ShipType, TradeType, PROTOCOL_VERSION,
};
