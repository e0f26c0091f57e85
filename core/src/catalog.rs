#![deny(missing_docs)]

//! # Type Catalog
//!
//! The set of structured types a resolver can see, keyed by lookup name.
//! `TypeDescriptor::Named` is resolved against this catalog.

use crate::adapters::{RecordType, ValidationSchema};
use crate::descriptor::StructuredType;
use crate::error::{AppError, AppResult};
use crate::parser::{extract_struct, extract_structs};
use crate::type_mapping::RustTypeMapper;
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

/// Input formats the catalog can ingest, each bound to one adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Rust source; structs become records.
    Rust,
    /// YAML/JSON schema-definition documents; entries become validation schemas.
    SchemaDocument,
}

impl SourceFormat {
    /// Probes the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("rs") => Some(SourceFormat::Rust),
            Some("yaml" | "yml" | "json") => Some(SourceFormat::SchemaDocument),
            _ => None,
        }
    }
}

/// Structured types by lookup name, in insertion order.
#[derive(Debug, Default)]
pub struct TypeCatalog {
    types: IndexMap<String, Box<dyn StructuredType>>,
}

impl TypeCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a structured type. A second type under the same lookup name is a collision.
    pub fn insert(&mut self, ty: impl StructuredType + 'static) -> AppResult<()> {
        self.insert_boxed(Box::new(ty))
    }

    /// Adds a boxed structured type.
    pub fn insert_boxed(&mut self, ty: Box<dyn StructuredType>) -> AppResult<()> {
        let name = ty.lookup_name().to_string();
        if let Some(existing) = self.types.get(&name) {
            return Err(AppError::NameCollision {
                name,
                existing: existing.key().to_string(),
                incoming: ty.key().to_string(),
            });
        }
        debug!(%name, kind = %ty.kind(), "catalogued structured type");
        self.types.insert(name, ty);
        Ok(())
    }

    /// Looks up a structured type.
    pub fn get(&self, name: &str) -> Option<&dyn StructuredType> {
        self.types.get(name).map(|t| t.as_ref())
    }

    /// Whether `name` is catalogued.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Lookup names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Number of catalogued types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Ingests source text with the adapter bound to `format`.
    ///
    /// Returns the number of types added. Loading is all-or-nothing: if any
    /// type fails to adapt or collides, the catalog is left unchanged.
    pub fn add_source(&mut self, format: SourceFormat, source: &str) -> AppResult<usize> {
        match format {
            SourceFormat::Rust => self.add_rust_source(source),
            SourceFormat::SchemaDocument => self.add_schema_document(source),
        }
    }

    /// Adds every named-field struct in a Rust source file as a record.
    pub fn add_rust_source(&mut self, code: &str) -> AppResult<usize> {
        let records = extract_structs(code)?
            .iter()
            .map(|parsed| {
                RecordType::from_parsed(parsed, &RustTypeMapper)
                    .map(|r| Box::new(r) as Box<dyn StructuredType>)
            })
            .collect::<AppResult<Vec<_>>>()?;
        self.insert_all(records)
    }

    /// Adds the single struct `name` from a Rust source file as a record.
    pub fn add_rust_type(&mut self, code: &str, name: &str) -> AppResult<()> {
        let parsed = extract_struct(code, name)?;
        self.insert(RecordType::from_parsed(&parsed, &RustTypeMapper)?)
    }

    /// Adds every definition in a YAML/JSON schema document as a validation schema.
    pub fn add_schema_document(&mut self, source: &str) -> AppResult<usize> {
        let schemas = ValidationSchema::from_yaml(source)?
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn StructuredType>)
            .collect();
        self.insert_all(schemas)
    }

    /// Inserts a batch only if no lookup name collides, within the batch or with the catalog.
    fn insert_all(&mut self, batch: Vec<Box<dyn StructuredType>>) -> AppResult<usize> {
        for (i, ty) in batch.iter().enumerate() {
            let name = ty.lookup_name();
            let existing = self
                .types
                .get(name)
                .map(|t| t.as_ref())
                .or_else(|| batch[..i].iter().find(|b| b.lookup_name() == name).map(|b| b.as_ref()));
            if let Some(existing) = existing {
                return Err(AppError::NameCollision {
                    name: name.to_string(),
                    existing: existing.key().to_string(),
                    incoming: ty.key().to_string(),
                });
            }
        }

        let count = batch.len();
        for ty in batch {
            self.insert_boxed(ty)?;
        }
        Ok(count)
    }
}
