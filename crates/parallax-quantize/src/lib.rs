//! Fixed-point length scales and deterministic quantization for Parallax.
//!
//! This crate removes floating point from identity-bearing geometry: raw
//! measurements are canonicalized (NaN/Inf/-0.0), rounded half-away-from-zero
//! onto a named quantization grid, and carried as integer quanta counts from
//! then on. Abnormal inputs are recorded as edge-case data in the result,
//! never thrown; callers decide whether an edge case is fatal.
//!
#![deny(missing_docs)]

/// Deterministic quantization of raw real numbers.
pub mod quantize;
/// Length scales and the fixed-point quantity type.
pub mod scale;

pub use quantize::{
    canonicalize_input, quantize, quantize_non_negative, EdgeCaseKind, QuantizationResult,
    GEOM_PRECISION_METERS, PATCH_PRECISION_METERS,
};
pub use scale::{LengthQuantity, LengthScale};
