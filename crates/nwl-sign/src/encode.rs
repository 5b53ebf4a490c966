//! Canonical query-string encoding
//!
//! The gateway signs the `application/x-www-form-urlencoded` serialization
//! of the request content, in the caller's field order (the protocol does
//! not sort keys). Space encodes as `+` and reserved characters are
//! percent-escaped as UTF-8, matching what the server recomputes on its
//! side.

use nwl_core::FieldMap;
use url::form_urlencoded;

/// Serialize a field map to its canonical query string
///
/// Pure and order-preserving; an empty map yields an empty string, which is
/// a valid (if degenerate) plaintext for the encryption stage.
///
/// # Example
///
/// ```rust
/// use nwl_core::FieldMap;
/// use nwl_sign::encode;
///
/// let mut fields = FieldMap::new();
/// fields.insert("MerchantOrderNo", "ORDER1");
/// fields.insert("Amt", 100);
///
/// assert_eq!(encode(&fields), "MerchantOrderNo=ORDER1&Amt=100");
/// ```
pub fn encode(fields: &FieldMap) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields.iter() {
        serializer.append_pair(name, &value.to_string());
    }
    serializer.finish()
}
