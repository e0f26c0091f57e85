#![deny(missing_docs)]

//! # Specgen Core
//!
//! Type-to-schema introspection engine: turns plain records and
//! validation-library schema definitions into OpenAPI 3 Schema Objects and
//! Parameter Objects.

/// Shared error types.
pub mod error;

/// Component naming helpers.
pub mod naming;

/// OpenAPI Schema Object model.
pub mod schema;

/// Type descriptors and the structured-type capability.
pub mod descriptor;

/// AST Parsing logic.
pub mod parser;

/// Type mapping logic (Rust -> descriptor).
pub mod type_mapping;

/// Record and validation-schema adapters.
pub mod adapters;

/// Catalog of structured types.
pub mod catalog;

/// Component definitions table.
pub mod definitions;

/// Schema resolution.
pub mod resolver;

/// Parameter Object builder.
pub mod parameter;

pub use adapters::{RecordType, ValidationSchema};
pub use catalog::{SourceFormat, TypeCatalog};
pub use definitions::{Definitions, MergePolicy};
pub use descriptor::{FieldDescriptor, Primitive, StructuredKind, StructuredType, TypeDescriptor};
pub use error::{AppError, AppResult};
pub use parameter::{build_parameter, Parameter, ParameterBuilder, ParameterLocation};
pub use resolver::{ReferencePolicy, SchemaResolver};
pub use schema::{Schema, SchemaType};
pub use type_mapping::{RustTypeMapper, TypeMapper};
