#![deny(missing_docs)]

//! # Parameter Builder
//!
//! Wraps one named value into an OpenAPI Parameter Object, delegating the
//! `schema` portion to the [`SchemaResolver`].
//!
//! `required` is a pass-through of the caller's flag for every location,
//! `path` included; it defaults to `true`.

use crate::definitions::Definitions;
use crate::descriptor::TypeDescriptor;
use crate::error::{AppError, AppResult};
use crate::naming::title_case;
use crate::resolver::{ReferencePolicy, SchemaResolver};
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

/// The location of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Query.
    Query,
    /// Path.
    Path,
    /// Header.
    Header,
    /// Cookie.
    Cookie,
}

impl FromStr for ParameterLocation {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "query" => Ok(ParameterLocation::Query),
            "path" => Ok(ParameterLocation::Path),
            "header" => Ok(ParameterLocation::Header),
            "cookie" => Ok(ParameterLocation::Cookie),
            other => Err(AppError::InvalidLocation(other.to_string())),
        }
    }
}

impl Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Cookie => write!(f, "cookie"),
        }
    }
}

/// An OpenAPI Parameter Object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter must be supplied. Always emitted.
    pub required: bool,
    /// Value schema.
    pub schema: Schema,
}

impl Parameter {
    /// Renders the parameter as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Builder for [`Parameter`].
///
/// # Examples
/// ```
/// use specgen_core::{Definitions, ParameterBuilder, SchemaResolver, TypeCatalog, TypeDescriptor};
/// use serde_json::json;
///
/// let catalog = TypeCatalog::new();
/// let resolver = SchemaResolver::new(&catalog);
/// let param = ParameterBuilder::new("id", "path")
///     .schema_type(TypeDescriptor::integer())
///     .build(&resolver, &mut Definitions::new())
///     .unwrap();
/// assert_eq!(
///     param.to_value(),
///     json!({"name": "id", "in": "path", "required": true,
///            "schema": {"title": "Id", "type": "integer"}})
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    name: String,
    location: String,
    ty: TypeDescriptor,
    default: Option<Value>,
    required: bool,
}

impl ParameterBuilder {
    /// Starts a parameter of type `Any`, required, without default.
    ///
    /// `location` is validated by [`ParameterBuilder::build`].
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ty: TypeDescriptor::Any,
            default: None,
            required: true,
        }
    }

    /// Sets the value type.
    pub fn schema_type(mut self, ty: TypeDescriptor) -> Self {
        self.ty = ty;
        self
    }

    /// Sets the default literal merged into the schema.
    pub fn default_value(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets requiredness.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Resolves the schema and assembles the parameter.
    ///
    /// A non-`$ref` schema without a title receives the title-cased parameter
    /// name (`test_param` -> `Test_Param`).
    pub fn build(
        self,
        resolver: &SchemaResolver<'_>,
        definitions: &mut Definitions,
    ) -> AppResult<Parameter> {
        let location = self.location.parse::<ParameterLocation>()?;
        let mut schema = resolver.resolve(&self.ty, ReferencePolicy::Reference, definitions)?;

        if !schema.is_reference() && schema.title.is_none() {
            schema.title = Some(title_case(&self.name));
        }
        if let Some(default) = self.default {
            schema.default = Some(default);
        }

        Ok(Parameter {
            name: self.name,
            location,
            required: self.required,
            schema,
        })
    }
}

/// One-call form of [`ParameterBuilder`].
pub fn build_parameter(
    resolver: &SchemaResolver<'_>,
    definitions: &mut Definitions,
    name: &str,
    location: &str,
    ty: TypeDescriptor,
    default: Option<Value>,
    required: bool,
) -> AppResult<Parameter> {
    let mut builder = ParameterBuilder::new(name, location)
        .schema_type(ty)
        .required(required);
    if let Some(default) = default {
        builder = builder.default_value(default);
    }
    builder.build(resolver, definitions)
}
