//! End-to-end signing pipeline tests
//!
//! The fixture values were produced with the server-compatible reference
//! implementation and must never drift: a single changed byte in the
//! encoding, padding, or digest composition breaks every transaction.

use nwl_core::{Credentials, FieldMap};
use nwl_sign::{digest, encode, encrypt, sign_fields, SignError};

const HASH_KEY: &str = "01234567890123456789012345678901";
const HASH_IV: &str = "0123456789012345";

const EXPECTED_CIPHERTEXT: &str =
    "7C8912E803C5BEE03A4717F6F8FC12DC4737882B24D4F7404DBA3633BAD84AC6";
const EXPECTED_DIGEST: &str =
    "55BAE9BAA781EE74B0941C14A959CF3BF13BBC98096BAB43F73C6E7A1C176688";

fn order_fields() -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("MerchantOrderNo", "ORDER1");
    fields.insert("Amt", 100);
    fields
}

#[test]
fn test_canonical_form_regression() {
    assert_eq!(encode(&order_fields()), "MerchantOrderNo=ORDER1&Amt=100");
}

#[test]
fn test_ciphertext_regression() {
    let ciphertext = encrypt(&order_fields(), HASH_KEY, HASH_IV).unwrap();
    assert_eq!(ciphertext, EXPECTED_CIPHERTEXT);
}

#[test]
fn test_digest_regression() {
    let hash = digest(EXPECTED_CIPHERTEXT, HASH_KEY, HASH_IV);
    assert_eq!(hash, EXPECTED_DIGEST);
}

#[test]
fn test_full_pipeline_regression() {
    let credentials = Credentials::new("MERCHANT_1", HASH_KEY, HASH_IV);
    let payload = sign_fields(&credentials, &order_fields()).unwrap();

    assert_eq!(payload.post_data, EXPECTED_CIPHERTEXT);
    assert_eq!(payload.encrypt_data, EXPECTED_CIPHERTEXT);
    assert_eq!(payload.hash_data, EXPECTED_DIGEST);
    assert_eq!(payload.merchant_id, "MERCHANT_1");
    assert_eq!(payload.uid, "MERCHANT_1");
    assert_eq!(payload.version, "1.0");
    assert_eq!(payload.respond_type, "JSON");
}

#[test]
fn test_field_order_changes_signature() {
    let mut reversed = FieldMap::new();
    reversed.insert("Amt", 100);
    reversed.insert("MerchantOrderNo", "ORDER1");

    let forward_ct = encrypt(&order_fields(), HASH_KEY, HASH_IV).unwrap();
    let reversed_ct = encrypt(&reversed, HASH_KEY, HASH_IV).unwrap();
    assert_ne!(forward_ct, reversed_ct);
    assert_ne!(
        digest(&forward_ct, HASH_KEY, HASH_IV),
        digest(&reversed_ct, HASH_KEY, HASH_IV)
    );
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let credentials = Credentials::new("MERCHANT_1", HASH_KEY, HASH_IV);
    let first = sign_fields(&credentials, &order_fields()).unwrap();
    let second = sign_fields(&credentials, &order_fields()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_field_map_signs() {
    let credentials = Credentials::new("MERCHANT_1", HASH_KEY, HASH_IV);
    let payload = sign_fields(&credentials, &FieldMap::new()).unwrap();

    // One padded block of ciphertext, full-length digest
    assert_eq!(payload.post_data.len(), 32);
    assert_eq!(payload.hash_data.len(), 64);
}

#[test]
fn test_length_gate_boundaries() {
    let fields = order_fields();

    let short_key = "K".repeat(31);
    let long_key = "K".repeat(33);
    for bad_key in ["", short_key.as_str(), long_key.as_str()] {
        assert!(matches!(
            encrypt(&fields, bad_key, HASH_IV),
            Err(SignError::HashKeyLength { expected: 32, .. })
        ));
    }

    let short_iv = "V".repeat(15);
    let long_iv = "V".repeat(17);
    for bad_iv in ["", short_iv.as_str(), long_iv.as_str()] {
        assert!(matches!(
            encrypt(&fields, HASH_KEY, bad_iv),
            Err(SignError::HashIvLength { expected: 16, .. })
        ));
    }

    assert!(encrypt(&fields, &"K".repeat(32), &"V".repeat(16)).is_ok());
}
