//! Field-set descriptors and schema-drift hashing for Parallax.
//!
//! A field-set hash pins the declared *shape* of an identity-adjacent record
//! type (its name plus each field's name, type, and optionality). It is a
//! coarse, cheap guard that fails CI loudly the moment a field is added,
//! removed, retyped, or renamed without a matching golden update — a
//! structural check, never a substitute for the canonical content digest.
//!
#![deny(missing_docs)]

/// Descriptors for the workspace's own identity-adjacent types.
pub mod descriptors;
/// Field-set descriptor type and its drift hash.
pub mod fieldset;

pub use fieldset::{FieldDescriptor, FieldSetDescriptor};
