//! Canonical value model and deterministic digest primitives for Parallax.
//!
//! Every byte that participates in a capture identity (`patchId`, `geomId`,
//! `meshEpochSalt`, `assetRoot`, `evidenceHash`) flows through this crate:
//! structured data becomes a [`CanonicalValue`] tree, the tree becomes sorted
//! whitespace-free UTF-8 JSON bytes, the bytes are prefixed with a registered
//! domain tag, and the result is digested with SHA-256. The same inputs must
//! produce bit-identical digests on every device and runtime, so the value
//! model has no floating-point variant and the serializer is fully specified
//! down to its escape rules.
//!
#![deny(missing_docs)]

/// Deterministic big-endian integer, string, and array byte encoding.
pub mod bytes;
/// Digest type and SHA-256 helpers.
pub mod digest;
/// Registered domain tags for identity separation.
pub mod domain;
/// Typed errors raised on identity-contract violations.
pub mod error;
/// Domain-separated identity digest construction.
pub mod identity;
/// Canonical JSON byte serialization.
pub mod serializer;
/// The closed canonical value model and conversions into it.
pub mod value;

pub use digest::{digest_bytes, digest_value, Digest, DigestAlg};
pub use domain::{tagged_input, DomainTag};
pub use error::{EncodeError, ValidationError};
pub use identity::{compute_identity, identity_of, verify_identity};
pub use serializer::canonical_bytes;
pub use value::{CanonicalValue, ToCanonical};
