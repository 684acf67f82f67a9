use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use parallax_canonical::{CanonicalValue, EncodeError, ToCanonical};

use crate::quantize::quantize;

/// Closed, append-only set of named quantization grids.
///
/// Each variant carries a frozen integer quantum in nanometers; every quantum
/// is an exact integer multiple of every finer one, so cross-scale conversion
/// is always an exact integer path. No floating conversion factors exist in
/// this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthScale {
    /// Coarse cross-epoch grid: 1 mm quanta.
    CrossEpoch,
    /// Fine per-session grid: 10 µm quanta.
    Session,
    /// System minimum grid: 1 µm quanta.
    SystemMin,
}

impl LengthScale {
    /// Quantum size in nanometers.
    pub const fn quantum_nanometers(self) -> i64 {
        match self {
            LengthScale::CrossEpoch => 1_000_000,
            LengthScale::Session => 10_000,
            LengthScale::SystemMin => 1_000,
        }
    }

    /// Frozen identifier string used in canonical encodings.
    pub const fn identifier(self) -> &'static str {
        match self {
            LengthScale::CrossEpoch => "cross-epoch",
            LengthScale::Session => "session",
            LengthScale::SystemMin => "system-min",
        }
    }

    /// Quantum size in meters, for quantizing raw measurements only.
    pub fn precision_meters(self) -> f64 {
        self.quantum_nanometers() as f64 * 1e-9
    }

    /// The finer (smaller-quantum) of two scales.
    pub fn finer(self, other: LengthScale) -> LengthScale {
        if self.quantum_nanometers() <= other.quantum_nanometers() {
            self
        } else {
            other
        }
    }
}

/// A fixed-point length: `quanta × quantum_nanometers(scale)` nanometers.
///
/// Immutable once constructed; arithmetic produces new values. Comparison and
/// addition across scales convert both operands to the finer scale through
/// the integer nanometer base, so no residual floating error can enter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LengthQuantity {
    /// Quantization grid this quantity lives on.
    pub scale: LengthScale,
    /// Signed quanta count.
    pub quanta: i64,
}

impl LengthQuantity {
    /// Constructs a quantity from an already-quantized quanta count.
    pub const fn new(scale: LengthScale, quanta: i64) -> Self {
        Self { scale, quanta }
    }

    /// Quantizes a raw measurement in meters onto `scale`, rounding
    /// half-away-from-zero.
    ///
    /// Edge-case inputs (NaN, ±Inf, out of range) quantize to 0 quanta; use
    /// [`crate::quantize::quantize`] directly when the forensic
    /// [`crate::QuantizationResult`] is needed.
    pub fn from_real_meters(meters: f64, scale: LengthScale) -> Self {
        let result = quantize(meters, scale.precision_meters());
        Self {
            scale,
            quanta: result.quantized,
        }
    }

    /// Display-only conversion back to meters.
    ///
    /// Never feed this into an identity computation; the float it returns is
    /// for UI and logs only.
    pub fn to_meters(&self) -> f64 {
        (self.quanta as f64) * self.scale.precision_meters()
    }

    /// Exact widened nanometer value; cannot overflow in i128.
    fn nanometers_wide(&self) -> i128 {
        i128::from(self.quanta) * i128::from(self.scale.quantum_nanometers())
    }

    /// Converts to another scale, only when the conversion is exact.
    ///
    /// Coarse-to-fine always succeeds (quanta multiply by an integer factor,
    /// `None` on i64 overflow). Fine-to-coarse succeeds only when the value
    /// lies exactly on the coarser grid; truncating division is forbidden.
    pub fn to_scale(&self, target: LengthScale) -> Option<Self> {
        let own = self.scale.quantum_nanometers();
        let dst = target.quantum_nanometers();
        if dst <= own {
            let factor = own / dst;
            let quanta = self.quanta.checked_mul(factor)?;
            Some(Self::new(target, quanta))
        } else {
            let factor = dst / own;
            if self.quanta % factor != 0 {
                return None;
            }
            Some(Self::new(target, self.quanta / factor))
        }
    }

    /// Adds two quantities, producing a value at the finer of the two scales.
    ///
    /// Returns `None` when the converted quanta overflow i64.
    pub fn checked_add(&self, other: &LengthQuantity) -> Option<Self> {
        let finer = self.scale.finer(other.scale);
        let lhs = self.to_scale(finer)?;
        let rhs = other.to_scale(finer)?;
        let quanta = lhs.quanta.checked_add(rhs.quanta)?;
        Some(Self::new(finer, quanta))
    }
}

impl PartialEq for LengthQuantity {
    fn eq(&self, other: &Self) -> bool {
        self.nanometers_wide() == other.nanometers_wide()
    }
}

impl Eq for LengthQuantity {}

impl PartialOrd for LengthQuantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LengthQuantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.nanometers_wide().cmp(&other.nanometers_wide())
    }
}

impl ToCanonical for LengthQuantity {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        Ok(CanonicalValue::object(vec![
            ("quanta".to_string(), CanonicalValue::Int(self.quanta)),
            (
                "scale".to_string(),
                CanonicalValue::String(self.scale.identifier().to_string()),
            ),
        ]))
    }
}
