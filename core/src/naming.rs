#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving component names, `$ref` pointers and parameter titles.

/// Prefix of every component reference emitted by the resolver.
pub const COMPONENT_REF_PREFIX: &str = "#/components/schemas/";

/// Builds the `$ref` pointer for a component name.
pub fn component_ref(component: &str) -> String {
    format!("{}{}", COMPONENT_REF_PREFIX, component)
}

/// Normalizes a declared type name into a component name.
///
/// OpenAPI restricts component keys to `[A-Za-z0-9._-]`; any other character
/// (e.g. `::` from a qualified path or spaces in a library title) becomes `_`.
pub fn component_name(declared: &str) -> String {
    declared
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Strips a trailing `Schema` from a validation-schema host name.
///
/// `MarshmallowNestedSchema` -> `MarshmallowNested`. A name that is exactly
/// `Schema` is kept as is.
pub fn strip_schema_suffix(name: &str) -> &str {
    match name.strip_suffix("Schema") {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Title-cases a parameter name.
///
/// Each alphabetic run starts upper-case and continues lower-case; every other
/// character is copied and ends the run.
///
/// e.g. `test_param` -> `Test_Param`, `userId` -> `Userid`
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }
    result
}
