//! Deterministic byte encoding primitives.
//!
//! Integers are always fixed-width big-endian. Strings are NFC-normalized
//! UTF-8 with a `u32` big-endian byte-length prefix and no terminator; an
//! embedded NUL is rejected. Arrays are a `u32` big-endian element count
//! followed by the encoded elements in caller order. No variable-length or
//! platform-endian path exists anywhere in this module.

use unicode_normalization::UnicodeNormalization;

use crate::error::EncodeError;

/// Appends a `u16` in big-endian byte order.
pub fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Appends a `u32` in big-endian byte order.
pub fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Appends a `u64` in big-endian byte order.
pub fn put_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Appends an `i64` in big-endian byte order (two's complement).
pub fn put_i64(out: &mut Vec<u8>, value: i64) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Encodes a string as `u32_be(byte_len) || nfc_utf8_bytes`.
///
/// The length counts bytes, not code points. NFC normalization runs first so
/// visually identical strings with different code point sequences encode
/// identically. Returns [`EncodeError::EmbeddedNul`] if the normalized bytes
/// contain a NUL, which would otherwise collide with the NUL-terminated
/// domain-tag framing.
pub fn encode_string(s: &str) -> Result<Vec<u8>, EncodeError> {
    if s.is_empty() {
        // Fast path: no normalization pass for the empty string.
        return Ok(vec![0, 0, 0, 0]);
    }
    let normalized: String = s.nfc().collect();
    if normalized.bytes().any(|b| b == 0) {
        return Err(EncodeError::EmbeddedNul {
            path: "root".to_string(),
        });
    }
    let len = u32::try_from(normalized.len()).map_err(|_| EncodeError::IntegerRange {
        path: "root".to_string(),
    })?;
    let mut out = Vec::with_capacity(4 + normalized.len());
    put_u32(&mut out, len);
    out.extend_from_slice(normalized.as_bytes());
    Ok(out)
}

/// Encodes an array as `u32_be(count) || concat(encode(element))`.
///
/// Element order is caller-significant and preserved verbatim; sorting, where
/// wanted, happens only in the canonical-value object serializer.
pub fn encode_array<T, F>(items: &[T], mut encode: F) -> Result<Vec<u8>, EncodeError>
where
    F: FnMut(&T) -> Result<Vec<u8>, EncodeError>,
{
    let count = u32::try_from(items.len()).map_err(|_| EncodeError::IntegerRange {
        path: "root".to_string(),
    })?;
    let mut out = Vec::new();
    put_u32(&mut out, count);
    for (idx, item) in items.iter().enumerate() {
        let encoded = encode(item).map_err(|e| e.nested_under(&format!("[{}]", idx)))?;
        out.extend_from_slice(&encoded);
    }
    Ok(out)
}
