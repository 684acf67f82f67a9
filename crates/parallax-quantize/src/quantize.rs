use serde::{Deserialize, Serialize};

/// Coarse precision for cross-session geometry identity, in meters (1 mm).
///
/// Frozen constant; never computed adaptively and never equal to
/// [`PATCH_PRECISION_METERS`].
pub const GEOM_PRECISION_METERS: f64 = 1e-3;

/// Fine precision for session-local patch identity, in meters (10 µm).
pub const PATCH_PRECISION_METERS: f64 = 1e-5;

// Safe overflow margin for the f64 -> i64 boundary. `i64::MAX as f64` rounds
// up to 2^63, so a strict less-than guarantees the rounded value casts
// without wrapping; `i64::MIN as f64` is exact and excluded outright.
const I64_LOWER_BOUND: f64 = i64::MIN as f64;
const I64_UPPER_BOUND: f64 = i64::MAX as f64;

/// Well-defined abnormal input conditions recorded during quantization.
///
/// Edge cases are data, not errors: quantization always returns a
/// [`QuantizationResult`] and upstream policy decides accept/clamp/reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCaseKind {
    /// Input was NaN or ±Infinity; canonicalized to 0.0.
    NanOrInf,
    /// Scaled value exceeds the representable 64-bit signed range.
    CoordinateOutOfRange,
    /// The conversion could not produce a usable value.
    ValidationFailed,
    /// Negative input where the caller disallows negatives; clamped to 0.
    NegativeDisallowed,
}

/// Outcome of a deterministic quantization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizationResult {
    /// Quanta count at the requested precision.
    pub quantized: i64,
    /// Edge cases encountered, in detection order. Empty on a clean run.
    pub edge_cases: Vec<EdgeCaseKind>,
    /// Original raw input, present iff `edge_cases` is non-empty or a clamp
    /// occurred. Absent on a clean conversion to keep audit payloads minimal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<f64>,
}

impl QuantizationResult {
    fn clean(quantized: i64) -> Self {
        Self {
            quantized,
            edge_cases: Vec::new(),
            raw_value: None,
        }
    }

    fn flagged(raw: f64, edge_cases: Vec<EdgeCaseKind>) -> Self {
        Self {
            quantized: 0,
            edge_cases,
            raw_value: Some(raw),
        }
    }

    /// True when no edge case was recorded.
    pub fn is_clean(&self) -> bool {
        self.edge_cases.is_empty()
    }
}

/// Canonicalizes a raw input before any further arithmetic.
///
/// NaN and ±Infinity collapse to `0.0` with [`EdgeCaseKind::NanOrInf`];
/// negative zero normalizes to `+0.0`. Runs first so bit-identical inputs
/// diverge into the same bucket on every platform.
pub fn canonicalize_input(x: f64) -> (f64, Option<EdgeCaseKind>) {
    if !x.is_finite() {
        return (0.0, Some(EdgeCaseKind::NanOrInf));
    }
    if x == 0.0 && x.is_sign_negative() {
        return (0.0, None);
    }
    (x, None)
}

// Hand-coded so the result never depends on a platform or library rounding
// mode: exact halves move away from zero, everything else goes to the
// nearest integer.
fn round_half_away_from_zero(v: f64) -> f64 {
    let truncated = v.trunc();
    let fraction = v - truncated;
    if fraction >= 0.5 {
        truncated + 1.0
    } else if fraction <= -0.5 {
        truncated - 1.0
    } else {
        truncated
    }
}

/// Quantizes `x` to an integer count of quanta at `precision` (in the same
/// unit as `x`).
///
/// Never panics and never returns an error; abnormal conditions come back as
/// [`EdgeCaseKind`] entries on the result. A non-finite or non-positive
/// `precision` is a degenerate denominator and yields
/// [`EdgeCaseKind::ValidationFailed`].
pub fn quantize(x: f64, precision: f64) -> QuantizationResult {
    let (canonical, edge) = canonicalize_input(x);
    if let Some(edge) = edge {
        return QuantizationResult::flagged(x, vec![edge]);
    }
    if !precision.is_finite() || precision <= 0.0 {
        return QuantizationResult::flagged(x, vec![EdgeCaseKind::ValidationFailed]);
    }

    let scaled = canonical / precision;
    if !(scaled > I64_LOWER_BOUND && scaled < I64_UPPER_BOUND) {
        return QuantizationResult::flagged(
            x,
            vec![
                EdgeCaseKind::CoordinateOutOfRange,
                EdgeCaseKind::ValidationFailed,
            ],
        );
    }

    QuantizationResult::clean(round_half_away_from_zero(scaled) as i64)
}

/// Quantizes a measurement that must not be negative.
///
/// A negative canonical input clamps to 0 quanta with
/// [`EdgeCaseKind::NegativeDisallowed`] and the raw value retained for audit.
pub fn quantize_non_negative(x: f64, precision: f64) -> QuantizationResult {
    let (canonical, edge) = canonicalize_input(x);
    if let Some(edge) = edge {
        return QuantizationResult::flagged(x, vec![edge]);
    }
    if canonical < 0.0 {
        return QuantizationResult::flagged(x, vec![EdgeCaseKind::NegativeDisallowed]);
    }
    quantize(canonical, precision)
}
