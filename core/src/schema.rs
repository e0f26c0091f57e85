#![deny(missing_docs)]

//! # Schema Objects
//!
//! The OpenAPI 3.0 Schema Object subset produced by the resolver.
//! Absent keys are omitted on serialization, so `Schema::default()` renders as `{}`.

use crate::naming::component_ref;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// The `type` keyword values emitted by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// `object`
    Object,
    /// `array`
    Array,
    /// `string`
    String,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
}

impl Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::Object => write!(f, "object"),
            SchemaType::Array => write!(f, "array"),
            SchemaType::String => write!(f, "string"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::Boolean => write!(f, "boolean"),
        }
    }
}

/// An OpenAPI Schema Object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Pointer to a registered component (`#/components/schemas/<Name>`).
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Value type. `None` means unconstrained.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    /// Refinement of `string` (`date`, `date-time`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Element schema, only with `type: array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Mandatory property names in declaration order, only with `type: object`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Property schemas in declaration order, only with `type: object`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    /// Default literal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Schema {
    /// An unconstrained schema (`{}`).
    pub fn any() -> Self {
        Self::default()
    }

    /// A schema with only `type` set.
    pub fn typed(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// A schema with `type` and `format` set.
    pub fn formatted(schema_type: SchemaType, format: &str) -> Self {
        Self {
            schema_type: Some(schema_type),
            format: Some(format.to_string()),
            ..Self::default()
        }
    }

    /// `{type: array, items: <items>}`.
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// `{title, type: object, required?, properties}`.
    ///
    /// `required` is omitted when empty.
    pub fn object(
        title: impl Into<String>,
        properties: IndexMap<String, Schema>,
        required: Vec<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            schema_type: Some(SchemaType::Object),
            required: (!required.is_empty()).then_some(required),
            properties: Some(properties),
            ..Self::default()
        }
    }

    /// `{$ref: "#/components/schemas/<component>"}`.
    pub fn reference(component: &str) -> Self {
        Self {
            reference: Some(component_ref(component)),
            ..Self::default()
        }
    }

    /// Whether this schema is a `$ref`.
    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }

    /// Sets the title, returning the modified schema.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the default literal, returning the modified schema.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Renders the schema as a JSON value.
    pub fn to_value(&self) -> Value {
        // Serialization of this type cannot fail: all keys are strings.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_any_serializes_empty() {
        assert_eq!(Schema::any().to_value(), json!({}));
    }

    #[test]
    fn test_formatted_keys() {
        let s = Schema::formatted(SchemaType::String, "date-time");
        assert_eq!(s.to_value(), json!({"type": "string", "format": "date-time"}));
    }

    #[test]
    fn test_reference_key() {
        let s = Schema::reference("User");
        assert!(s.is_reference());
        assert_eq!(s.to_value(), json!({"$ref": "#/components/schemas/User"}));
    }

    #[test]
    fn test_object_omits_empty_required() {
        let mut props = IndexMap::new();
        props.insert("note".to_string(), Schema::typed(SchemaType::String));
        let s = Schema::object("Memo", props, Vec::new());
        assert_eq!(
            s.to_value(),
            json!({"title": "Memo", "type": "object", "properties": {"note": {"type": "string"}}})
        );
    }

    #[test]
    fn test_deserialize_round_shape() {
        let s: Schema =
            serde_json::from_value(json!({"type": "array", "items": {}, "default": []})).unwrap();
        assert_eq!(s.schema_type, Some(SchemaType::Array));
        assert_eq!(s.items.as_deref(), Some(&Schema::any()));
        assert_eq!(s.default, Some(json!([])));
    }
}
