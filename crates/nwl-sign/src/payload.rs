//! Assembly of the transmittable payload

use crate::cipher::encrypt;
use crate::digest::digest;
use crate::error::SignError;
use nwl_core::{Credentials, FieldMap, RespondType, PROTOCOL_VERSION};
use serde::Serialize;

/// The signed field set posted to the gateway
///
/// Serializes directly as an `application/x-www-form-urlencoded` body with
/// the gateway's wire field names. The ciphertext travels under both
/// `PostData_` and `EncryptData_`, and the merchant id under both
/// `MerchantID_` and `UID_`; the gateway still reads the mirrored legacy
/// names, so both copies are transmitted verbatim.
///
/// Immutable after assembly; every field is a string because the transport
/// is form-encoded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedPayload {
    #[serde(rename = "MerchantID_")]
    pub merchant_id: String,
    #[serde(rename = "PostData_")]
    pub post_data: String,
    #[serde(rename = "UID_")]
    pub uid: String,
    #[serde(rename = "EncryptData_")]
    pub encrypt_data: String,
    #[serde(rename = "HashData_")]
    pub hash_data: String,
    #[serde(rename = "Version_")]
    pub version: String,
    #[serde(rename = "RespondType_")]
    pub respond_type: String,
}

impl SignedPayload {
    /// The payload as ordered wire-name/value pairs
    pub fn form_pairs(&self) -> [(&'static str, &str); 7] {
        [
            ("MerchantID_", self.merchant_id.as_str()),
            ("PostData_", self.post_data.as_str()),
            ("UID_", self.uid.as_str()),
            ("EncryptData_", self.encrypt_data.as_str()),
            ("HashData_", self.hash_data.as_str()),
            ("Version_", self.version.as_str()),
            ("RespondType_", self.respond_type.as_str()),
        ]
    }
}

/// Combine the signing outputs with the protocol constants
///
/// Pure construction: no timestamps or counters are injected here, so the
/// same three inputs always assemble to the same payload. A timestamp, when
/// the operation requires one, is a signed field supplied by the caller.
pub fn assemble(merchant_id: &str, ciphertext_hex: &str, digest_hex: &str) -> SignedPayload {
    SignedPayload {
        merchant_id: merchant_id.to_string(),
        post_data: ciphertext_hex.to_string(),
        uid: merchant_id.to_string(),
        encrypt_data: ciphertext_hex.to_string(),
        hash_data: digest_hex.to_string(),
        version: PROTOCOL_VERSION.to_string(),
        respond_type: RespondType::Json.as_str().to_string(),
    }
}

/// Run the full signing pipeline over a field map
///
/// Encrypts the canonical form of `fields`, digests the ciphertext, and
/// assembles the transmittable payload.
///
/// # Errors
///
/// Returns `SignError` if the credential key material has the wrong byte
/// length.
pub fn sign_fields(credentials: &Credentials, fields: &FieldMap) -> Result<SignedPayload, SignError> {
    let ciphertext = encrypt(fields, &credentials.hash_key, &credentials.hash_iv)?;
    let hash = digest(&ciphertext, &credentials.hash_key, &credentials.hash_iv);
    Ok(assemble(&credentials.merchant_id, &ciphertext, &hash))
}
