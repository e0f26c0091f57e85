#![deny(missing_docs)]

//! # Structured Type Adapters
//!
//! Normalizes each source type system into the [`StructuredType`] capability.
//!
//! - **record**: plain data records, built by hand or from Rust source.
//! - **validation**: validation-library schema definitions loaded from YAML/JSON.
//!
//! [`StructuredType`]: crate::descriptor::StructuredType

pub mod record;
pub mod validation;

pub use record::RecordType;
pub use validation::{SchemaDefinition, SchemaDocument, SchemaField, ValidationSchema};
