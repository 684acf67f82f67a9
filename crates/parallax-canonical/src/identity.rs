//! Domain-separated identity digest construction.
//!
//! Identity digests are computed as
//! `sha256(tagged_input(tag, canonical_bytes(value)))`. This module is the
//! single construction path for every Parallax identity; searching for its
//! call sites audits all identity logic.

use crate::digest::{digest_bytes, Digest};
use crate::domain::{tagged_input, DomainTag};
use crate::error::EncodeError;
use crate::serializer::canonical_bytes;
use crate::value::{CanonicalValue, ToCanonical};

/// Computes the identity digest for a canonical value under `tag`.
///
/// # Example
///
/// ```rust
/// use parallax_canonical::{compute_identity, domain, CanonicalValue};
///
/// let value = CanonicalValue::from_json(&serde_json::json!({"x": 1000, "y": -250}))?;
/// let id = compute_identity(domain::PATCH_ID, &value);
/// assert_eq!(id.hex.len(), 64);
/// # Ok::<(), parallax_canonical::EncodeError>(())
/// ```
pub fn compute_identity(tag: DomainTag, value: &CanonicalValue) -> Digest {
    let bytes = canonical_bytes(value);
    digest_bytes(&tagged_input(tag, &bytes))
}

/// Converts a record to canonical form and computes its identity under `tag`.
///
/// # Errors
///
/// Returns [`EncodeError`] when the record cannot enter the canonical model
/// (float leakage, integer range, embedded NUL).
pub fn identity_of<T: ToCanonical>(tag: DomainTag, value: &T) -> Result<Digest, EncodeError> {
    let canonical = value.to_canonical()?;
    Ok(compute_identity(tag, &canonical))
}

/// Verifies that a claimed identity digest matches the computed one.
pub fn verify_identity(tag: DomainTag, value: &CanonicalValue, claimed: &Digest) -> bool {
    &compute_identity(tag, value) == claimed
}
