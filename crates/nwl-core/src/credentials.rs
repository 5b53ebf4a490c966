//! Merchant credentials issued by the gateway

/// Credentials for one merchant account
///
/// `hash_key` must be exactly 32 UTF-8 bytes and `hash_iv` exactly 16; the
/// lengths are enforced by the signing pipeline at the point of use, so
/// credentials can be loaded and held before the first request is signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub merchant_id: String,
    pub hash_key: String,
    pub hash_iv: String,
}

impl Credentials {
    pub fn new(
        merchant_id: impl Into<String>,
        hash_key: impl Into<String>,
        hash_iv: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            hash_key: hash_key.into(),
            hash_iv: hash_iv.into(),
        }
    }
}
