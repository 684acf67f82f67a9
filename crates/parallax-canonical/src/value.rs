use std::fmt;

use serde_json::Value;

use crate::error::EncodeError;

/// A value in the canonical model.
///
/// This is a closed tagged union with **no floating-point variant**: a float
/// cannot be represented on the identity path by construction, which is the
/// central invariant of the whole subsystem. Objects hold ordered
/// `(key, value)` pairs but are logically unordered sets; every construction
/// path sorts them by UTF-8 byte order of the key, and the serializer
/// re-sorts defensively. Arrays preserve caller order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalValue {
    /// Object with key-sorted `(key, value)` pairs. Keys must be unique.
    Object(Vec<(String, CanonicalValue)>),
    /// Array in caller-significant order.
    Array(Vec<CanonicalValue>),
    /// UTF-8 string.
    String(String),
    /// 64-bit signed integer.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// Null.
    Null,
}

impl CanonicalValue {
    /// Builds an object, sorting the pairs by UTF-8 byte order of the key.
    ///
    /// Prefer this over constructing [`CanonicalValue::Object`] directly so
    /// that sortedness holds at the point of construction rather than being
    /// repaired later.
    pub fn object(mut pairs: Vec<(String, CanonicalValue)>) -> Self {
        pairs.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        CanonicalValue::Object(pairs)
    }

    /// Converts a parsed JSON value into the canonical model.
    ///
    /// Raises [`EncodeError::FloatForbidden`] the moment a non-integer number
    /// is encountered at any depth, and [`EncodeError::IntegerRange`] for
    /// unsigned values above `i64::MAX`. The error carries the dotted path to
    /// the offending field.
    pub fn from_json(value: &Value) -> Result<CanonicalValue, EncodeError> {
        Self::from_json_at(value, Path::root())
    }

    fn from_json_at(value: &Value, path: Path) -> Result<CanonicalValue, EncodeError> {
        match value {
            Value::Object(map) => {
                let mut pairs = Vec::with_capacity(map.len());
                for (key, child) in map {
                    let child = Self::from_json_at(child, path.push_field(key))?;
                    pairs.push((key.clone(), child));
                }
                Ok(CanonicalValue::object(pairs))
            }
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    out.push(Self::from_json_at(item, path.push_index(idx))?);
                }
                Ok(CanonicalValue::Array(out))
            }
            Value::Number(num) => {
                if let Some(i) = num.as_i64() {
                    Ok(CanonicalValue::Int(i))
                } else if num.as_u64().is_some() {
                    Err(EncodeError::IntegerRange {
                        path: path.to_string(),
                    })
                } else {
                    Err(EncodeError::FloatForbidden {
                        path: path.to_string(),
                        type_name: "f64",
                    })
                }
            }
            Value::String(s) => Ok(CanonicalValue::String(s.clone())),
            Value::Bool(b) => Ok(CanonicalValue::Bool(*b)),
            Value::Null => Ok(CanonicalValue::Null),
        }
    }
}

/// Helper for building dotted JSON paths during conversion.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Conversion of an identity-bearing type into the canonical model.
///
/// Implementing this trait is the only way a record type enters the identity
/// path. There is intentionally no implementation for `f32` or `f64`; a
/// record holding raw floats must quantize them into fixed-point form before
/// it can be hashed.
pub trait ToCanonical {
    /// Returns the canonical value for `self`.
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError>;
}

impl ToCanonical for CanonicalValue {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        Ok(self.clone())
    }
}

impl ToCanonical for i64 {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        Ok(CanonicalValue::Int(*self))
    }
}

impl ToCanonical for i32 {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        Ok(CanonicalValue::Int(i64::from(*self)))
    }
}

impl ToCanonical for u32 {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        Ok(CanonicalValue::Int(i64::from(*self)))
    }
}

impl ToCanonical for u64 {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        i64::try_from(*self)
            .map(CanonicalValue::Int)
            .map_err(|_| EncodeError::IntegerRange {
                path: "root".to_string(),
            })
    }
}

impl ToCanonical for bool {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        Ok(CanonicalValue::Bool(*self))
    }
}

impl ToCanonical for str {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        Ok(CanonicalValue::String(self.to_string()))
    }
}

impl ToCanonical for String {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        Ok(CanonicalValue::String(self.clone()))
    }
}

impl<T: ToCanonical> ToCanonical for Option<T> {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        match self {
            Some(value) => value.to_canonical(),
            None => Ok(CanonicalValue::Null),
        }
    }
}

impl<T: ToCanonical> ToCanonical for Vec<T> {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        self.as_slice().to_canonical()
    }
}

impl<T: ToCanonical> ToCanonical for [T] {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        let mut out = Vec::with_capacity(self.len());
        for (idx, item) in self.iter().enumerate() {
            let item = item
                .to_canonical()
                .map_err(|e| e.nested_under(&format!("[{}]", idx)))?;
            out.push(item);
        }
        Ok(CanonicalValue::Array(out))
    }
}

impl<T: ToCanonical + ?Sized> ToCanonical for &T {
    fn to_canonical(&self) -> Result<CanonicalValue, EncodeError> {
        (**self).to_canonical()
    }
}
