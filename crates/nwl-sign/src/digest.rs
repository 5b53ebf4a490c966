//! SHA-256 digest over the gateway's composition string

use sha2::{Digest, Sha256};

/// Compute the integrity digest transmitted as `HashData_`
///
/// The gateway verifies requests against SHA-256 of the fixed composition
///
/// ```text
/// HashKey=<key>&<ciphertext>&HashIV=<iv>
/// ```
///
/// with the key and IV interpolated raw (no percent-encoding). Returns a
/// 64-character uppercase hex string.
///
/// # Example
///
/// ```rust
/// use nwl_sign::digest;
///
/// let hash = digest(
///     "ABCDEF",
///     "01234567890123456789012345678901",
///     "0123456789012345",
/// );
/// assert_eq!(hash.len(), 64);
/// ```
pub fn digest(ciphertext_hex: &str, hash_key: &str, hash_iv: &str) -> String {
    let raw = format!("HashKey={hash_key}&{ciphertext_hex}&HashIV={hash_iv}");

    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode_upper(hasher.finalize())
}
