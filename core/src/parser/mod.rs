#![deny(missing_docs)]

//! # Parser Module
//!
//! Handles parsing of Rust source code using the rust-analyzer syntax library.
//! Extracts named-field structs, their fields, and serde/oai attributes.

pub mod attributes;
pub mod extractors;
pub mod models;

pub use extractors::{extract_struct, extract_structs};
pub use models::{ParsedField, ParsedStruct};
