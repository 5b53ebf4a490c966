//! AES-256-CBC encryption of the canonical string

use crate::encode::encode;
use crate::error::SignError;
use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use nwl_core::FieldMap;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Required HashKey length in UTF-8 bytes
pub const HASH_KEY_LEN: usize = 32;

/// Required HashIV length in UTF-8 bytes
pub const HASH_IV_LEN: usize = 16;

/// Encrypt a field map for transmission as `PostData_`
///
/// The fields are serialized to their canonical query string, encrypted
/// with AES-256-CBC under the merchant's HashKey/HashIV using PKCS#7
/// padding (a full extra block when the plaintext is already aligned), and
/// returned as uppercase hex.
///
/// The IV is reused as supplied; the gateway derives the same ciphertext
/// on its side, so no per-call randomness is permitted here.
///
/// # Errors
///
/// Returns `SignError` if `hash_key` is not exactly 32 UTF-8 bytes or
/// `hash_iv` is not exactly 16.
///
/// # Example
///
/// ```rust
/// use nwl_core::FieldMap;
/// use nwl_sign::encrypt;
///
/// let mut fields = FieldMap::new();
/// fields.insert("MerchantOrderNo", "ORDER1");
///
/// let ciphertext = encrypt(
///     &fields,
///     "01234567890123456789012345678901",
///     "0123456789012345",
/// )
/// .unwrap();
/// assert_eq!(ciphertext, ciphertext.to_uppercase());
/// ```
pub fn encrypt(fields: &FieldMap, hash_key: &str, hash_iv: &str) -> Result<String, SignError> {
    check_key_lengths(hash_key, hash_iv)?;

    let canonical = encode(fields);
    let encryptor = Aes256CbcEnc::new_from_slices(hash_key.as_bytes(), hash_iv.as_bytes())
        .expect("key and IV lengths are checked above");
    let ciphertext = encryptor.encrypt_padded_vec_mut::<Pkcs7>(canonical.as_bytes());

    Ok(hex::encode_upper(ciphertext))
}

/// Validate HashKey/HashIV byte lengths
///
/// Lengths are measured in UTF-8 bytes, so multibyte characters count once
/// per byte.
pub(crate) fn check_key_lengths(hash_key: &str, hash_iv: &str) -> Result<(), SignError> {
    if hash_key.len() != HASH_KEY_LEN {
        return Err(SignError::HashKeyLength {
            expected: HASH_KEY_LEN,
            actual: hash_key.len(),
        });
    }
    if hash_iv.len() != HASH_IV_LEN {
        return Err(SignError::HashIvLength {
            expected: HASH_IV_LEN,
            actual: hash_iv.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // 32 and 16 bytes, matching the sandbox credential shape
    const HASH_KEY: &str = "YOUR_HASH_KEY_YOUR_HASH_KEY_KEY_";
    const HASH_IV: &str = "YOUR_HASH_IV_IV_";

    fn sample_fields() -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("foo", "bar");
        fields
    }

    #[test]
    fn test_output_is_uppercase_hex() {
        let ciphertext = encrypt(&sample_fields(), HASH_KEY, HASH_IV).unwrap();
        assert!(!ciphertext.is_empty());
        assert_eq!(ciphertext, ciphertext.to_uppercase());
        assert!(ciphertext.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_known_ciphertext() {
        // foo=bar is 7 bytes, padded to one 16-byte block
        let ciphertext = encrypt(&sample_fields(), HASH_KEY, HASH_IV).unwrap();
        assert_eq!(ciphertext, "BFAD1BEC3CC1852C7C8C9970FC585ACE");
    }

    #[test]
    fn test_determinism() {
        let first = encrypt(&sample_fields(), HASH_KEY, HASH_IV).unwrap();
        let second = encrypt(&sample_fields(), HASH_KEY, HASH_IV).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_key_rejected() {
        let err = encrypt(&sample_fields(), "SHORT_KEY", HASH_IV).unwrap_err();
        assert_eq!(err, SignError::HashKeyLength { expected: 32, actual: 9 });
        assert!(err.to_string().contains("32 bytes"));
    }

    #[test]
    fn test_long_key_rejected() {
        let key = "X".repeat(33);
        let err = encrypt(&sample_fields(), &key, HASH_IV).unwrap_err();
        assert_eq!(err, SignError::HashKeyLength { expected: 32, actual: 33 });
    }

    #[test]
    fn test_short_iv_rejected() {
        let err = encrypt(&sample_fields(), HASH_KEY, "SHORT_IV").unwrap_err();
        assert_eq!(err, SignError::HashIvLength { expected: 16, actual: 8 });
        assert!(err.to_string().contains("16 bytes"));
    }

    #[test]
    fn test_key_length_measured_in_bytes_not_chars() {
        // 32 characters, but the multibyte ones push the byte count to 34
        let key = format!("中{}", "X".repeat(31));
        assert_eq!(key.chars().count(), 32);
        let err = encrypt(&sample_fields(), &key, HASH_IV).unwrap_err();
        assert_eq!(err, SignError::HashKeyLength { expected: 32, actual: 34 });
    }

    #[test]
    fn test_exact_lengths_accepted() {
        // Boundary: exactly 32/16 bytes succeeds
        assert!(encrypt(&sample_fields(), &"K".repeat(32), &"V".repeat(16)).is_ok());
    }

    #[test]
    fn test_empty_fields_produce_one_padded_block() {
        let ciphertext = encrypt(&FieldMap::new(), HASH_KEY, HASH_IV).unwrap();
        // One 16-byte padding block, hex-encoded
        assert_eq!(ciphertext.len(), 32);
    }

    #[test]
    fn test_block_aligned_plaintext_gains_full_padding_block() {
        // "0123456789=abcde" encodes to exactly 16 bytes
        let mut fields = FieldMap::new();
        fields.insert("0123456789", "abcde");
        assert_eq!(crate::encode(&fields).len(), 16);

        let ciphertext = encrypt(&fields, HASH_KEY, HASH_IV).unwrap();
        // Two blocks: the aligned plaintext plus a full PKCS#7 padding block
        assert_eq!(ciphertext.len(), 64);
    }

    #[test]
    fn test_different_fields_different_ciphertext() {
        let mut other = FieldMap::new();
        other.insert("foo", "baz");
        assert_ne!(
            encrypt(&sample_fields(), HASH_KEY, HASH_IV).unwrap(),
            encrypt(&other, HASH_KEY, HASH_IV).unwrap()
        );
    }
}
