//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Every failure is reported synchronously to the immediate caller; resolution
/// never returns partial results.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A type descriptor matches no known category (primitive, list,
    /// structured, or any). Caller bug.
    #[from(ignore)]
    #[display("Unsupported type: {_0}")]
    UnsupportedType(String),

    /// A parameter location outside `query`, `path`, `header`, `cookie`.
    #[from(ignore)]
    #[display("Invalid parameter location '{_0}': expected one of query, path, header, cookie")]
    InvalidLocation(String),

    /// Two distinct structured types claim the same component or lookup name.
    #[from(ignore)]
    #[display("Name '{name}' is claimed by both {existing} and {incoming}")]
    NameCollision {
        /// The contested component name.
        name: String,
        /// Owner already registered under `name`.
        existing: String,
        /// Owner that attempted to register under `name`.
        incoming: String,
    },

    /// A default literal on a field whose type is structured or unknown.
    #[from(ignore)]
    #[display("Default on field '{field}' of '{component}' is not supported for structured or untyped fields")]
    UnsupportedDefault {
        /// Component that declares the field.
        component: String,
        /// Offending field name.
        field: String,
    },

    /// A malformed schema-definition document.
    #[from(ignore)]
    #[display("Invalid definition: {_0}")]
    InvalidDefinition(String),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
