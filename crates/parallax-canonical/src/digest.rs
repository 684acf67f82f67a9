use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::error::ValidationError;
use crate::serializer::canonical_bytes;
use crate::value::CanonicalValue;

/// Supported digest algorithms for canonical identifiers.
///
/// Introducing a second algorithm requires a new, explicitly versioned
/// schema; there is no runtime negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlg {
    /// SHA-256 (the only Parallax algorithm).
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + digest bytes, encoded as 64 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Lowercase hex digest text (64 characters for SHA-256).
    pub hex: String,
}

impl Digest {
    /// Constructs a validated digest from pre-encoded hex text.
    pub fn new(alg: DigestAlg, hex: impl Into<String>) -> Result<Self, ValidationError> {
        let hex = hex.into();
        let re = Regex::new(r"^[0-9a-f]{64}$").expect("invalid regex");
        if !re.is_match(&hex) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: hex,
            });
        }
        Ok(Digest { alg, hex })
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex)
    }
}

/// Hashes raw bytes with SHA-256, returning a lowercase-hex digest.
pub fn digest_bytes(bytes: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    Digest {
        alg: DigestAlg::Sha256,
        hex: hex::encode(hasher.finalize()),
    }
}

/// Hashes the canonical bytes of a value (no domain tag).
///
/// Identity digests must go through [`crate::identity::compute_identity`]
/// instead so they carry a domain tag.
pub fn digest_value(value: &CanonicalValue) -> Digest {
    digest_bytes(&canonical_bytes(value))
}
