#![deny(missing_docs)]

//! # Validation Schema Adapter
//!
//! Validation-library schema definitions in the marshmallow manner: a host
//! class name, an optional library-declared title, and a registry of typed
//! fields that are optional unless marked `required`.
//!
//! ```yaml
//! name: OrderSchema
//! fields:
//!   id: { kind: int, required: true }
//!   lines: { kind: nested, schema: OrderLineSchema, many: true }
//!   note: { kind: str, load_default: "" }
//! ```

use crate::descriptor::{
    FieldDescriptor, Primitive, StructuredKind, StructuredType, TypeDescriptor,
};
use crate::error::{AppError, AppResult};
use crate::naming::{component_name, strip_schema_suffix};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// One field entry of a schema-definition document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchemaField {
    /// Field kind (`str`, `int`, `float`, `bool`, `date`, `datetime`, `raw`, `list`, `nested`, ...).
    pub kind: String,
    /// Element field for `list`.
    #[serde(default)]
    pub items: Option<Box<SchemaField>>,
    /// Referenced schema host name for `nested`.
    #[serde(default)]
    pub schema: Option<String>,
    /// `nested` only: the field holds a list of the referenced schema.
    #[serde(default)]
    pub many: bool,
    /// Whether the field must be present.
    #[serde(default)]
    pub required: bool,
    /// Value used when the field is absent.
    #[serde(default)]
    pub load_default: Option<Value>,
    /// Wire name override.
    #[serde(default)]
    pub data_key: Option<String>,
}

/// A raw schema definition as written in a document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchemaDefinition {
    /// Host class name, also the lookup name.
    pub name: String,
    /// Library-declared name; takes precedence over `name` for the component.
    #[serde(default)]
    pub title: Option<String>,
    /// Field registry in declaration order.
    #[serde(default)]
    pub fields: IndexMap<String, SchemaField>,
}

/// A schema-definition document: one definition or a sequence of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaDocument {
    /// Several definitions.
    Many(Vec<SchemaDefinition>),
    /// A single definition.
    One(SchemaDefinition),
}

impl SchemaDocument {
    /// Parses a YAML (or JSON) document.
    pub fn from_yaml(source: &str) -> AppResult<Self> {
        serde_yaml::from_str(source)
            .map_err(|e| AppError::InvalidDefinition(format!("Failed to parse schema document: {}", e)))
    }

    /// Normalizes every definition in the document.
    pub fn into_schemas(self) -> AppResult<Vec<ValidationSchema>> {
        let definitions = match self {
            SchemaDocument::Many(defs) => defs,
            SchemaDocument::One(def) => vec![def],
        };
        definitions
            .into_iter()
            .map(ValidationSchema::try_from)
            .collect()
    }
}

/// A normalized validation-library schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSchema {
    name: String,
    title: Option<String>,
    fields: Vec<FieldDescriptor>,
}

impl ValidationSchema {
    /// Parses and normalizes every definition in a YAML/JSON document.
    pub fn from_yaml(source: &str) -> AppResult<Vec<Self>> {
        SchemaDocument::from_yaml(source)?.into_schemas()
    }

    /// The library-declared title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl TryFrom<SchemaDefinition> for ValidationSchema {
    type Error = AppError;

    fn try_from(def: SchemaDefinition) -> AppResult<Self> {
        let mut fields = Vec::with_capacity(def.fields.len());

        for (field_name, field) in &def.fields {
            if field.required && field.load_default.is_some() {
                return Err(AppError::InvalidDefinition(format!(
                    "{}.{}: a required field cannot declare load_default",
                    def.name, field_name
                )));
            }
            let ty = field_type(field, &def.name, field_name)?;
            let wire_name = field.data_key.as_deref().unwrap_or(field_name);
            let mut descriptor = FieldDescriptor::new(wire_name, ty).with_required(field.required);
            descriptor.default = field.load_default.clone();
            fields.push(descriptor);
        }

        Ok(Self {
            name: def.name,
            title: def.title,
            fields,
        })
    }
}

fn field_type(field: &SchemaField, schema: &str, name: &str) -> AppResult<TypeDescriptor> {
    let ty = match field.kind.to_ascii_lowercase().as_str() {
        "str" | "string" | "email" | "url" | "uuid" => TypeDescriptor::string(),
        "int" | "integer" => TypeDescriptor::integer(),
        "float" | "number" | "decimal" => TypeDescriptor::number(),
        "bool" | "boolean" => TypeDescriptor::boolean(),
        "date" => TypeDescriptor::Primitive(Primitive::Date),
        "datetime" => TypeDescriptor::Primitive(Primitive::DateTime),
        "raw" => TypeDescriptor::Any,
        "list" => TypeDescriptor::List(
            field
                .items
                .as_deref()
                .map(|items| field_type(items, schema, name))
                .transpose()?
                .map(Box::new),
        ),
        "nested" => {
            let target = field.schema.as_deref().ok_or_else(|| {
                AppError::InvalidDefinition(format!(
                    "{}.{}: nested field without `schema`",
                    schema, name
                ))
            })?;
            let named = TypeDescriptor::named(target);
            if field.many {
                TypeDescriptor::list_of(named)
            } else {
                named
            }
        }
        other => {
            return Err(AppError::UnsupportedType(format!(
                "field kind '{}' on {}.{}",
                other, schema, name
            )))
        }
    };
    Ok(ty)
}

impl StructuredType for ValidationSchema {
    fn kind(&self) -> StructuredKind {
        StructuredKind::ValidationSchema
    }

    fn lookup_name(&self) -> &str {
        &self.name
    }

    fn component_name(&self) -> String {
        match self.title.as_deref() {
            Some(title) => component_name(title),
            None => component_name(strip_schema_suffix(&self.name)),
        }
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NESTED: &str = r#"
name: MarshmallowNestedSchema
fields:
  str_field: { kind: str, required: true }
  int_field: { kind: int }
  list_field: { kind: list, items: { kind: str } }
  nested_schema: { kind: nested, schema: MarshmallowSchema }
  self_reference: { kind: nested, schema: MarshmallowNestedSchema }
"#;

    #[test]
    fn test_parse_single_definition() {
        let schemas = ValidationSchema::from_yaml(NESTED).unwrap();
        assert_eq!(schemas.len(), 1);
        let schema = &schemas[0];

        assert_eq!(schema.lookup_name(), "MarshmallowNestedSchema");
        assert_eq!(schema.component_name(), "MarshmallowNested");

        let fields = schema.fields();
        assert_eq!(fields.len(), 5);
        assert!(fields[0].required);
        assert!(!fields[1].required);
        assert_eq!(
            fields[2].ty,
            TypeDescriptor::list_of(TypeDescriptor::string())
        );
        assert_eq!(fields[4].ty, TypeDescriptor::named("MarshmallowNestedSchema"));
    }

    #[test]
    fn test_title_takes_precedence() {
        let doc = "name: PetSchema\ntitle: Animal\nfields: {}";
        let schema = &ValidationSchema::from_yaml(doc).unwrap()[0];
        assert_eq!(schema.title(), Some("Animal"));
        assert_eq!(schema.component_name(), "Animal");
    }

    #[test]
    fn test_sequence_document_and_json() {
        let doc = r#"[
            {"name": "TagSchema", "fields": {"label": {"kind": "string"}}},
            {"name": "PostSchema", "fields": {
                "tags": {"kind": "nested", "schema": "TagSchema", "many": true},
                "score": {"kind": "float", "load_default": 0.5, "data_key": "rating"}
            }}
        ]"#;
        let schemas = ValidationSchema::from_yaml(doc).unwrap();
        assert_eq!(schemas.len(), 2);

        let post = &schemas[1];
        assert_eq!(
            post.fields()[0].ty,
            TypeDescriptor::list_of(TypeDescriptor::named("TagSchema"))
        );
        assert_eq!(post.fields()[1].name, "rating");
        assert_eq!(post.fields()[1].default, Some(json!(0.5)));
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let doc = "name: BadSchema\nfields:\n  blob: { kind: pickle }";
        let err = ValidationSchema::from_yaml(doc).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedType(msg) if msg.contains("pickle")));
    }

    #[test]
    fn test_nested_without_schema() {
        let doc = "name: BadSchema\nfields:\n  child: { kind: nested }";
        let err = ValidationSchema::from_yaml(doc).unwrap_err();
        assert!(matches!(err, AppError::InvalidDefinition(_)));
    }

    #[test]
    fn test_required_with_default_rejected() {
        let doc = "name: BadSchema\nfields:\n  n: { kind: int, required: true, load_default: 1 }";
        let err = ValidationSchema::from_yaml(doc).unwrap_err();
        assert!(matches!(err, AppError::InvalidDefinition(_)));
    }

    #[test]
    fn test_unparameterized_list() {
        let doc = "name: BagSchema\nfields:\n  things: { kind: list }";
        let schema = &ValidationSchema::from_yaml(doc).unwrap()[0];
        assert_eq!(schema.fields()[0].ty, TypeDescriptor::bare_list());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = ValidationSchema::from_yaml("name: [unterminated").unwrap_err();
        assert!(matches!(err, AppError::InvalidDefinition(_)));
    }
}
