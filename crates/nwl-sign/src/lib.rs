//! # NWL Sign
//!
//! Deterministic request signing for the NewebPay logistics gateway.
//!
//! This crate provides:
//! - Canonical query-string encoding of an ordered field mapping
//! - AES-256-CBC encryption of the canonical string (`PostData_`)
//! - SHA-256 digest over the gateway's composition string (`HashData_`)
//! - Assembly of the final transmittable payload
//!
//! ## Pipeline
//!
//! ```text
//! FieldMap --encode--> canonical string --encrypt--> ciphertext (hex, upper)
//!                                             |
//!                                             v
//!              HashKey=<key>&<ciphertext>&HashIV=<iv> --sha256--> digest
//! ```
//!
//! Every stage is pure and deterministic: the IV is caller-supplied and
//! reused as given (a gateway protocol requirement, not a general CBC
//! practice), so identical inputs always produce identical bytes. The
//! server recomputes the same pipeline to verify the request, which is why
//! the encoding must preserve field order and match
//! `application/x-www-form-urlencoded` percent-encoding exactly.
//!
//! ## Example
//!
//! ```rust
//! use nwl_core::{Credentials, FieldMap};
//! use nwl_sign::sign_fields;
//!
//! let credentials = Credentials::new(
//!     "MERCHANT_1",
//!     "01234567890123456789012345678901",
//!     "0123456789012345",
//! );
//!
//! let mut fields = FieldMap::new();
//! fields.insert("MerchantOrderNo", "ORDER1");
//! fields.insert("Amt", 100);
//!
//! let payload = sign_fields(&credentials, &fields).unwrap();
//! assert_eq!(payload.hash_data.len(), 64);
//! ```

mod cipher;
mod digest;
mod encode;
mod error;
mod payload;

pub use cipher::{encrypt, HASH_IV_LEN, HASH_KEY_LEN};
pub use digest::digest;
pub use encode::encode;
pub use error::SignError;
pub use payload::{assemble, sign_fields, SignedPayload};
