use thiserror::Error;

/// Errors raised while converting or encoding values on the identity path.
///
/// These are contract violations in caller code, not data conditions: a float
/// reached the identity path, an integer cannot be represented, a recursive
/// encode lost a value, or a string carried an embedded NUL. Each variant
/// carries the dotted path to the offending field so the leak can be located
/// without a debugger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A floating-point value was encountered anywhere in the input graph.
    #[error("floating-point value forbidden at {path} (type {type_name})")]
    FloatForbidden {
        /// Dotted path to the offending field (`root` for the top level).
        path: String,
        /// Name of the rejected type.
        type_name: &'static str,
    },
    /// An integer exceeds the representable 64-bit signed range.
    #[error("integer out of range at {path}")]
    IntegerRange {
        /// Dotted path to the offending field.
        path: String,
    },
    /// A recursive encode produced no value; internal consistency failure.
    /// Note: This variant is reserved for slot-style encoders that fill
    /// values after the fact. Bottom-up construction cannot leave a slot
    /// empty, so nothing in this crate raises it today; it stays part of the
    /// frozen error surface for external `ToCanonical` implementations.
    #[error("missing value at {path}")]
    MissingValue {
        /// Dotted path to the slot that was left empty.
        path: String,
    },
    /// A string contained an embedded NUL byte after NFC normalization.
    #[error("embedded NUL byte at {path}")]
    EmbeddedNul {
        /// Dotted path to the offending string.
        path: String,
    },
}

impl EncodeError {
    /// Prefixes `segment` onto the error's dotted path.
    ///
    /// Record-level `ToCanonical` implementations use this to attribute an
    /// error raised by a leaf encoder to the field being encoded.
    pub fn nested_under(self, segment: &str) -> Self {
        match self {
            EncodeError::FloatForbidden { path, type_name } => EncodeError::FloatForbidden {
                path: join_path(segment, &path),
                type_name,
            },
            EncodeError::IntegerRange { path } => EncodeError::IntegerRange {
                path: join_path(segment, &path),
            },
            EncodeError::MissingValue { path } => EncodeError::MissingValue {
                path: join_path(segment, &path),
            },
            EncodeError::EmbeddedNul { path } => EncodeError::EmbeddedNul {
                path: join_path(segment, &path),
            },
        }
    }
}

fn join_path(segment: &str, path: &str) -> String {
    if path == "root" {
        segment.to_string()
    } else {
        format!("{}.{}", segment, path)
    }
}

/// Validation errors for canonical primitives.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
