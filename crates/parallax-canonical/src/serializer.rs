//! Canonical JSON byte serialization.
//!
//! Produces the unique byte sequence for a [`CanonicalValue`]: sorted object
//! keys, caller-ordered arrays, no whitespace, fixed escaping rules, LF-only
//! control escapes. Serialization is infallible because every rejectable
//! input is refused earlier, while constructing the value.

use crate::value::CanonicalValue;

/// Serializes a canonical value to its canonical UTF-8 JSON bytes.
pub fn canonical_bytes(value: &CanonicalValue) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &CanonicalValue, out: &mut Vec<u8>) {
    match value {
        CanonicalValue::Object(pairs) => {
            // Re-derive sort order here as well: sub-trees spliced in from
            // other builders are not trusted to be sorted.
            let mut sorted: Vec<&(String, CanonicalValue)> = pairs.iter().collect();
            sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            out.push(b'{');
            for (idx, (key, child)) in sorted.iter().enumerate() {
                if idx > 0 {
                    out.push(b',');
                }
                write_string(key, out);
                out.push(b':');
                write_value(child, out);
            }
            out.push(b'}');
        }
        CanonicalValue::Array(items) => {
            out.push(b'[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(b',');
                }
                write_value(item, out);
            }
            out.push(b']');
        }
        CanonicalValue::String(s) => write_string(s, out),
        CanonicalValue::Int(i) => out.extend_from_slice(i.to_string().as_bytes()),
        CanonicalValue::Bool(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
        CanonicalValue::Null => out.extend_from_slice(b"null"),
    }
}

fn write_string(s: &str, out: &mut Vec<u8>) {
    out.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            c if (c as u32) < 0x20 => {
                let escaped = format!("\\u{:04x}", c as u32);
                out.extend_from_slice(escaped.as_bytes());
            }
            c => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out.push(b'"');
}
