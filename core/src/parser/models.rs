//! # Data Models
//!
//! Intermediate Representation (IR) structures for parsed Rust code.

/// Represents a field extracted from a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    /// The name of the field.
    pub name: String,
    /// The raw Rust type string.
    pub ty: String,
    /// The name override for JSON/Schema (e.g. from `#[serde(rename="...")]`).
    pub rename: Option<String>,
    /// Whether the field is marked to be skipped in serialization/schema.
    pub is_skipped: bool,
    /// Whether the field falls back to a default when absent (`#[serde(default)]`).
    pub has_default: bool,
}

impl ParsedField {
    /// The property name on the wire.
    pub fn wire_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}

/// Represents a fully parsed named-field struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStruct {
    /// The struct name.
    pub name: String,
    /// The struct name override (e.g. `#[oai(rename="...")]`).
    pub rename: Option<String>,
    /// Container-level `#[serde(default)]`: every field may be omitted.
    pub has_default: bool,
    /// The list of fields.
    pub fields: Vec<ParsedField>,
}
