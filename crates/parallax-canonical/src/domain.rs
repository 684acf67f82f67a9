//! Registered domain tags for identity separation.
//!
//! Every identity hash input is prefixed with one of the tags below so the
//! same byte sequence hashed for two different purposes can never collide.
//! The registry is append-only: renaming or removing a tag would silently
//! change historical identities and is forbidden. Byte lengths are documented
//! in `docs/domains.md` for downstream validators.
//!
//! All domain-tagged input construction goes through [`tagged_input`]; ad-hoc
//! concatenation of raw bytes is forbidden in identity-relevant code.

use crate::bytes::put_u32;

/// A registered, NUL-terminated ASCII domain tag.
///
/// The trailing NUL guarantees no tag is a valid prefix of another, so a
/// crafted payload in one domain can never replay as a hash input in a
/// different domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainTag {
    name: &'static str,
    bytes: &'static [u8],
}

impl DomainTag {
    /// Short registry name (e.g. `patch`), used by tooling.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Full tag bytes including the trailing NUL terminator.
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Looks up a registered tag by its short name.
    pub fn by_name(name: &str) -> Option<DomainTag> {
        REGISTRY.iter().copied().find(|tag| tag.name == name)
    }
}

/// Per-session patch identity (`patchId`).
pub const PATCH_ID: DomainTag = DomainTag {
    name: "patch",
    bytes: b"parallax:patch:v1\0",
};

/// Cross-session geometry identity (`geomId`).
pub const GEOM_ID: DomainTag = DomainTag {
    name: "geom",
    bytes: b"parallax:geom:v1\0",
};

/// Mesh epoch salt derivation (`meshEpochSalt`).
pub const MESH_EPOCH_SALT: DomainTag = DomainTag {
    name: "mesh-epoch",
    bytes: b"parallax:mesh-epoch:v1\0",
};

/// Asset root identity (`assetRoot`).
pub const ASSET_ROOT: DomainTag = DomainTag {
    name: "asset-root",
    bytes: b"parallax:asset-root:v1\0",
};

/// Evidence record hash (`evidenceHash`).
pub const EVIDENCE_HASH: DomainTag = DomainTag {
    name: "evidence",
    bytes: b"parallax:evidence:v1\0",
};

/// The closed set of registered tags. Append-only.
pub const REGISTRY: [DomainTag; 5] = [PATCH_ID, GEOM_ID, MESH_EPOCH_SALT, ASSET_ROOT, EVIDENCE_HASH];

/// Builds the domain-tagged hash input for `payload`.
///
/// Layout: `u32_be(tag_byte_len) || tag_bytes_including_nul || payload`. The
/// length prefix follows the string-encoding convention; the tag's NUL
/// terminator is counted in the length.
pub fn tagged_input(tag: DomainTag, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + tag.bytes.len() + payload.len());
    // Tag bytes are frozen ASCII constants well under u32::MAX.
    put_u32(&mut out, tag.bytes.len() as u32);
    out.extend_from_slice(tag.bytes);
    out.extend_from_slice(payload);
    out
}
