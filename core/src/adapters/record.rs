#![deny(missing_docs)]

//! # Record Adapter
//!
//! Plain data records: an ordered list of typed fields under a type name.

use crate::descriptor::{FieldDescriptor, StructuredKind, StructuredType, TypeDescriptor};
use crate::error::AppResult;
use crate::naming::component_name;
use crate::parser::ParsedStruct;
use crate::type_mapping::TypeMapper;
use serde_json::Value;

/// A plain record type.
///
/// # Examples
/// ```
/// use specgen_core::adapters::RecordType;
/// use specgen_core::descriptor::{StructuredType, TypeDescriptor};
///
/// let record = RecordType::new("Pet")
///     .field("name", TypeDescriptor::string())
///     .field("age", TypeDescriptor::optional(TypeDescriptor::integer()));
/// assert_eq!(record.component_name(), "Pet");
/// assert!(record.fields()[0].required);
/// assert!(!record.fields()[1].required);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    name: String,
    rename: Option<String>,
    fields: Vec<FieldDescriptor>,
}

impl RecordType {
    /// Creates an empty record named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rename: None,
            fields: Vec::new(),
        }
    }

    /// Overrides the component name (e.g. from `#[serde(rename = "...")]`).
    pub fn with_rename(mut self, rename: impl Into<String>) -> Self {
        self.rename = Some(rename.into());
        self
    }

    /// Appends a field; it is required unless `ty` is `Optional`.
    pub fn field(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.fields.push(FieldDescriptor::new(name, ty));
        self
    }

    /// Appends a field with a default literal; it is never required.
    pub fn field_with_default(
        mut self,
        name: impl Into<String>,
        ty: TypeDescriptor,
        default: Value,
    ) -> Self {
        self.fields
            .push(FieldDescriptor::new(name, ty).with_default(default));
        self
    }

    /// Appends a pre-built field descriptor.
    pub fn push_field(&mut self, field: FieldDescriptor) {
        self.fields.push(field);
    }

    /// Builds a record from a parsed Rust struct.
    ///
    /// Skipped fields are dropped, renamed fields use their wire name, and a
    /// field with `#[serde(default)]` (or inside a defaulted struct) is not
    /// required.
    pub fn from_parsed(parsed: &ParsedStruct, mapper: &impl TypeMapper) -> AppResult<Self> {
        let mut record = RecordType::new(&parsed.name);
        record.rename = parsed.rename.clone();

        for field in parsed.fields.iter().filter(|f| !f.is_skipped) {
            let ty = mapper.map(&field.ty)?;
            let mut descriptor = FieldDescriptor::new(field.wire_name(), ty);
            if field.has_default || parsed.has_default {
                descriptor.required = false;
            }
            record.push_field(descriptor);
        }

        Ok(record)
    }
}

impl StructuredType for RecordType {
    fn kind(&self) -> StructuredKind {
        StructuredKind::Record
    }

    fn lookup_name(&self) -> &str {
        &self.name
    }

    fn component_name(&self) -> String {
        component_name(self.rename.as_deref().unwrap_or(&self.name))
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_struct;
    use crate::type_mapping::RustTypeMapper;
    use serde_json::json;

    #[test]
    fn test_from_parsed_struct() {
        let code = r#"
            #[serde(rename = "Account")]
            struct User {
                #[serde(rename = "userId")]
                id: i64,
                nickname: Option<String>,
                #[serde(default)]
                tags: Vec<String>,
                #[serde(skip)]
                password_hash: String,
            }
        "#;
        let parsed = extract_struct(code, "User").unwrap();
        let record = RecordType::from_parsed(&parsed, &RustTypeMapper).unwrap();

        assert_eq!(record.lookup_name(), "User");
        assert_eq!(record.component_name(), "Account");

        let names: Vec<_> = record.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["userId", "nickname", "tags"]);

        let required: Vec<_> = record.fields().iter().map(|f| f.required).collect();
        assert_eq!(required, vec![true, false, false]);
    }

    #[test]
    fn test_renames_to_flag_words_keep_field() {
        let code = r#"
            struct Cfg {
                #[serde(rename = "skip")]
                skip_count: i32,
                #[serde(rename = "default")]
                is_default: bool,
            }
        "#;
        let parsed = extract_struct(code, "Cfg").unwrap();
        let record = RecordType::from_parsed(&parsed, &RustTypeMapper).unwrap();

        let fields: Vec<_> = record
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), f.required))
            .collect();
        assert_eq!(fields, vec![("skip", true), ("default", true)]);
    }

    #[test]
    fn test_struct_level_default() {
        let code = "#[serde(default)] struct Settings { verbose: bool, depth: u8 }";
        let parsed = extract_struct(code, "Settings").unwrap();
        let record = RecordType::from_parsed(&parsed, &RustTypeMapper).unwrap();
        assert!(record.fields().iter().all(|f| !f.required));
    }

    #[test]
    fn test_unsupported_field_type_propagates() {
        let code = "struct Pair { both: (i32, i32) }";
        let parsed = extract_struct(code, "Pair").unwrap();
        assert!(RecordType::from_parsed(&parsed, &RustTypeMapper).is_err());
    }

    #[test]
    fn test_field_with_default() {
        let record = RecordType::new("Page").field_with_default(
            "size",
            TypeDescriptor::integer(),
            json!(20),
        );
        let field = &record.fields()[0];
        assert_eq!(field.default, Some(json!(20)));
        assert!(!field.required);
    }
}
