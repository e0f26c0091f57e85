#![deny(missing_docs)]

//! # Type Descriptors
//!
//! The input vocabulary of the resolver: primitives, lists, optional wrappers,
//! named structured types and the unconstrained `Any`.
//!
//! Structured types are never embedded in a descriptor. They are referenced by
//! lookup name and resolved through a [`TypeCatalog`](crate::catalog::TypeCatalog),
//! which lets self-referential and mutually-referential types be described
//! without ownership cycles.

use crate::schema::{Schema, SchemaType};
use serde_json::Value;
use std::fmt::{self, Display};

/// Scalar kinds with a fixed schema rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `{type: string}`
    String,
    /// `{type: integer}`
    Integer,
    /// `{type: number}`
    Number,
    /// `{type: boolean}`
    Boolean,
    /// `{type: string, format: date}`
    Date,
    /// `{type: string, format: date-time}`
    DateTime,
}

impl Primitive {
    /// Renders the fixed `{type, format?}` pair.
    pub fn schema(self) -> Schema {
        match self {
            Primitive::String => Schema::typed(SchemaType::String),
            Primitive::Integer => Schema::typed(SchemaType::Integer),
            Primitive::Number => Schema::typed(SchemaType::Number),
            Primitive::Boolean => Schema::typed(SchemaType::Boolean),
            Primitive::Date => Schema::formatted(SchemaType::String, "date"),
            Primitive::DateTime => Schema::formatted(SchemaType::String, "date-time"),
        }
    }
}

/// Describes the type of a value to be rendered as a schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeDescriptor {
    /// No type information; renders as `{}`.
    #[default]
    Any,
    /// A scalar.
    Primitive(Primitive),
    /// A list. `None` means unparameterized.
    List(Option<Box<TypeDescriptor>>),
    /// An optional value. Renders as the inner type and makes a field non-required.
    Optional(Box<TypeDescriptor>),
    /// A structured type, by catalog lookup name.
    Named(String),
}

impl TypeDescriptor {
    /// Shorthand for `Primitive(String)`.
    pub fn string() -> Self {
        TypeDescriptor::Primitive(Primitive::String)
    }

    /// Shorthand for `Primitive(Integer)`.
    pub fn integer() -> Self {
        TypeDescriptor::Primitive(Primitive::Integer)
    }

    /// Shorthand for `Primitive(Number)`.
    pub fn number() -> Self {
        TypeDescriptor::Primitive(Primitive::Number)
    }

    /// Shorthand for `Primitive(Boolean)`.
    pub fn boolean() -> Self {
        TypeDescriptor::Primitive(Primitive::Boolean)
    }

    /// A list of `inner`.
    pub fn list_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::List(Some(Box::new(inner)))
    }

    /// An unparameterized list.
    pub fn bare_list() -> Self {
        TypeDescriptor::List(None)
    }

    /// An optional `inner`.
    pub fn optional(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Optional(Box::new(inner))
    }

    /// A structured type referenced by lookup name.
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    /// Whether this descriptor is an `Optional` wrapper.
    pub fn is_optional(&self) -> bool {
        matches!(self, TypeDescriptor::Optional(_))
    }

    /// The descriptor with every `Optional` wrapper removed.
    pub fn unwrap_optional(&self) -> &TypeDescriptor {
        let mut current = self;
        while let TypeDescriptor::Optional(inner) = current {
            current = inner;
        }
        current
    }

    /// Whether a default literal can be rendered for this type.
    ///
    /// Only primitives and lists carry defaults; structured and untyped
    /// fields do not.
    pub fn accepts_default(&self) -> bool {
        matches!(
            self.unwrap_optional(),
            TypeDescriptor::Primitive(_) | TypeDescriptor::List(_)
        )
    }
}

/// One normalized field of a structured type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Property name as it appears on the wire.
    pub name: String,
    /// Field type.
    pub ty: TypeDescriptor,
    /// Default literal copied into the property schema.
    pub default: Option<Value>,
    /// Whether the property is listed in `required`.
    pub required: bool,
}

impl FieldDescriptor {
    /// A field that is required unless `ty` is `Optional`.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        let required = !ty.is_optional();
        Self {
            name: name.into(),
            ty,
            default: None,
            required,
        }
    }

    /// Attaches a default literal; a defaulted field is never required.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self.required = false;
        self
    }

    /// Overrides requiredness.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// The source type system a structured type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuredKind {
    /// A plain data record (e.g. a Rust struct).
    Record,
    /// A validation-library schema definition.
    ValidationSchema,
}

impl Display for StructuredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuredKind::Record => write!(f, "record"),
            StructuredKind::ValidationSchema => write!(f, "validation schema"),
        }
    }
}

/// Identity of a structured type, used to tell apart two types competing for
/// one component name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeKey {
    /// Source type system.
    pub kind: StructuredKind,
    /// Catalog lookup name.
    pub lookup_name: String,
}

impl Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`", self.kind, self.lookup_name)
    }
}

/// The capability shared by every structured type variant.
///
/// Adapters normalize their source representation into this shape; the
/// resolver never inspects anything else.
pub trait StructuredType: fmt::Debug + Send + Sync {
    /// Source type system.
    fn kind(&self) -> StructuredKind;

    /// Name under which other descriptors refer to this type.
    fn lookup_name(&self) -> &str;

    /// Component name under `#/components/schemas/`.
    fn component_name(&self) -> String;

    /// Fields in declaration order.
    fn fields(&self) -> &[FieldDescriptor];

    /// Identity used for collision detection.
    fn key(&self) -> TypeKey {
        TypeKey {
            kind: self.kind(),
            lookup_name: self.lookup_name().to_string(),
        }
    }
}
