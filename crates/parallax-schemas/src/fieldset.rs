use serde::{Deserialize, Serialize};

use parallax_canonical::{digest_bytes, Digest};

/// One declared field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the field is optional.
    pub optional: bool,
}

/// Value-typed description of a record type's declared shape.
///
/// Used purely for drift detection, never for content identity. Declaration
/// order of fields does not affect the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSetDescriptor {
    /// Name of the described type.
    pub type_name: String,
    /// Declared fields, in any order.
    pub fields: Vec<FieldDescriptor>,
}

impl FieldSetDescriptor {
    /// Starts a descriptor for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Declares a required field.
    pub fn field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
        });
        self
    }

    /// Declares an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            type_name: type_name.into(),
            optional: true,
        });
        self
    }

    /// Renders the canonical drift text: a `type:` line followed by one
    /// `field:<name>:<type>:<optional|required>` line per field, sorted by
    /// field name, LF-joined with no trailing newline.
    pub fn render(&self) -> String {
        let mut fields: Vec<&FieldDescriptor> = self.fields.iter().collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));

        let mut lines = Vec::with_capacity(1 + fields.len());
        lines.push(format!("type:{}", self.type_name));
        for field in fields {
            lines.push(format!(
                "field:{}:{}:{}",
                field.name,
                field.type_name,
                if field.optional { "optional" } else { "required" }
            ));
        }
        lines.join("\n")
    }

    /// SHA-256 of the rendered drift text, lowercase hex.
    pub fn hash(&self) -> Digest {
        digest_bytes(self.render().as_bytes())
    }
}
