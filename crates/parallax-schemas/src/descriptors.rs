//! Field-set descriptors for the workspace's own identity-adjacent types.
//!
//! These mirror the Rust struct declarations in `parallax-quantize` and
//! `parallax-canonical`. Golden hashes over them live in `tests/drift.rs`;
//! changing a struct without updating its descriptor (and the golden) is
//! exactly the drift these guards exist to catch.

use crate::fieldset::FieldSetDescriptor;

/// Shape of `parallax_quantize::QuantizationResult`.
pub fn quantization_result() -> FieldSetDescriptor {
    FieldSetDescriptor::new("QuantizationResult")
        .field("quantized", "i64")
        .field("edge_cases", "vec<EdgeCaseKind>")
        .optional_field("raw_value", "f64")
}

/// Shape of `parallax_quantize::LengthQuantity`.
pub fn length_quantity() -> FieldSetDescriptor {
    FieldSetDescriptor::new("LengthQuantity")
        .field("scale", "LengthScale")
        .field("quanta", "i64")
}

/// Shape of `parallax_canonical::Digest`.
pub fn digest() -> FieldSetDescriptor {
    FieldSetDescriptor::new("Digest")
        .field("alg", "DigestAlg")
        .field("hex", "string")
}
