#![deny(missing_docs)]

//! # Schema Resolver
//!
//! Maps a `TypeDescriptor` to an OpenAPI Schema Object.
//!
//! Dispatch order:
//! 1. Primitives render their fixed `{type, format?}` pair.
//! 2. Lists render `{type: array, items}`; an unparameterized list has `items: {}`.
//! 3. Named structured types register a component and render as `$ref`
//!    (or inline at the top level under [`ReferencePolicy::Inline`]).
//! 4. `Any` renders as `{}`.
//!
//! A structured type claims its component name before its fields are resolved,
//! so self-reference and mutual reference terminate with a `$ref`.

use crate::catalog::TypeCatalog;
use crate::definitions::{Claim, Definitions};
use crate::descriptor::{StructuredType, TypeDescriptor};
use crate::error::{AppError, AppResult};
use crate::schema::Schema;
use indexmap::IndexMap;
use tracing::trace;

/// Whether a structured type renders as a `$ref` or as its own body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePolicy {
    /// `{$ref: "#/components/schemas/<Name>"}`. Used for every nested occurrence.
    #[default]
    Reference,
    /// The full object schema. Applies only to the outermost structured type.
    Inline,
}

/// Resolves type descriptors against a catalog of structured types.
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> SchemaResolver<'a> {
    /// Creates a resolver over `catalog`.
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this resolver reads.
    pub fn catalog(&self) -> &'a TypeCatalog {
        self.catalog
    }

    /// Resolves `ty`, registering every structured type met into `definitions`.
    ///
    /// On error, `definitions` is restored to its state before the call.
    ///
    /// # Examples
    /// ```
    /// use specgen_core::{Definitions, ReferencePolicy, SchemaResolver, TypeCatalog, TypeDescriptor};
    /// use serde_json::json;
    ///
    /// let catalog = TypeCatalog::new();
    /// let resolver = SchemaResolver::new(&catalog);
    /// let mut defs = Definitions::new();
    /// let schema = resolver
    ///     .resolve(&TypeDescriptor::bare_list(), ReferencePolicy::Reference, &mut defs)
    ///     .unwrap();
    /// assert_eq!(schema.to_value(), json!({"type": "array", "items": {}}));
    /// ```
    pub fn resolve(
        &self,
        ty: &TypeDescriptor,
        policy: ReferencePolicy,
        definitions: &mut Definitions,
    ) -> AppResult<Schema> {
        let checkpoint = definitions.checkpoint();
        let result = self.resolve_type(ty, policy, definitions);
        if result.is_err() {
            definitions.rollback(checkpoint);
        }
        result
    }

    /// Resolves `ty` inline into a fresh table and returns every component the
    /// pass produced, the top-level type first when it is structured.
    pub fn inspect(&self, ty: &TypeDescriptor) -> AppResult<IndexMap<String, Schema>> {
        let mut definitions = Definitions::new();
        self.resolve(ty, ReferencePolicy::Inline, &mut definitions)?;
        Ok(definitions.into_schemas())
    }

    fn resolve_type(
        &self,
        ty: &TypeDescriptor,
        policy: ReferencePolicy,
        definitions: &mut Definitions,
    ) -> AppResult<Schema> {
        trace!(?ty, ?policy, "resolving");
        match ty {
            TypeDescriptor::Primitive(primitive) => Ok(primitive.schema()),
            TypeDescriptor::List(None) => Ok(Schema::array(Schema::any())),
            TypeDescriptor::List(Some(inner)) => {
                let items = self.resolve_type(inner, ReferencePolicy::Reference, definitions)?;
                Ok(Schema::array(items))
            }
            TypeDescriptor::Optional(inner) => self.resolve_type(inner, policy, definitions),
            TypeDescriptor::Named(name) => {
                let structured = self
                    .catalog
                    .get(name)
                    .ok_or_else(|| AppError::UnsupportedType(name.clone()))?;
                self.resolve_structured(structured, policy, definitions)
            }
            TypeDescriptor::Any => Ok(Schema::any()),
        }
    }

    fn resolve_structured(
        &self,
        ty: &dyn StructuredType,
        policy: ReferencePolicy,
        definitions: &mut Definitions,
    ) -> AppResult<Schema> {
        let component = ty.component_name();

        if definitions.claim(&component, &ty.key())? == Claim::Existing {
            return Ok(match (policy, definitions.get(&component)) {
                (ReferencePolicy::Inline, Some(body)) => body.clone(),
                _ => Schema::reference(&component),
            });
        }

        let mut properties = IndexMap::with_capacity(ty.fields().len());
        let mut required = Vec::new();

        for field in ty.fields() {
            let mut schema =
                self.resolve_type(&field.ty, ReferencePolicy::Reference, definitions)?;
            if let Some(default) = &field.default {
                if !field.ty.accepts_default() {
                    return Err(AppError::UnsupportedDefault {
                        component,
                        field: field.name.clone(),
                    });
                }
                schema.default = Some(default.clone());
            }
            if field.required {
                required.push(field.name.clone());
            }
            properties.insert(field.name.clone(), schema);
        }

        let body = Schema::object(component.as_str(), properties, required);
        definitions.fill(&component, body.clone());

        Ok(match policy {
            ReferencePolicy::Reference => Schema::reference(&component),
            ReferencePolicy::Inline => body,
        })
    }
}
