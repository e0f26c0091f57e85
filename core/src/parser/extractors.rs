//! # Extraction Logic
//!
//! High-level functions to parse Rust code into IR models.

use crate::error::{AppError, AppResult};
use crate::parser::attributes::extract_attributes;
use crate::parser::models::{ParsedField, ParsedStruct};
use ra_ap_edition::Edition;
use ra_ap_syntax::ast::{self, HasName};
use ra_ap_syntax::{AstNode, SourceFile};
use tracing::debug;

/// Extracts every named-field (or unit) struct in declaration order.
///
/// Tuple structs carry no field names and are skipped.
pub fn extract_structs(code: &str) -> AppResult<Vec<ParsedStruct>> {
    let parse = SourceFile::parse(code, Edition::Edition2021);
    let file = parse.tree();
    let mut structs = Vec::new();

    for struct_def in file.syntax().descendants().filter_map(ast::Struct::cast) {
        let Some(name) = struct_def.name() else {
            continue;
        };
        let name = name.text().to_string();
        match parse_struct_node(&struct_def, &name) {
            Some(parsed) => structs.push(parsed),
            None => debug!(%name, "skipping tuple struct"),
        }
    }

    Ok(structs)
}

/// Parsing function to extract one struct definition including attribute metadata.
///
/// # Examples
/// ```
/// use specgen_core::parser::extract_struct;
///
/// let code = r#"
///     #[serde(rename = "MyUser")]
///     struct User {
///         #[serde(rename = "userId")]
///         id: i32,
///         #[serde(skip)]
///         hidden: String
///     }
/// "#;
/// let info = extract_struct(code, "User").unwrap();
/// assert_eq!(info.rename.as_deref(), Some("MyUser"));
/// assert_eq!(info.fields[0].rename.as_deref(), Some("userId"));
/// assert!(info.fields[1].is_skipped);
/// ```
pub fn extract_struct(code: &str, struct_name: &str) -> AppResult<ParsedStruct> {
    let parse = SourceFile::parse(code, Edition::Edition2021);
    let file = parse.tree();

    let struct_def = file
        .syntax()
        .descendants()
        .find_map(|node| {
            ast::Struct::cast(node).filter(|s| s.name().is_some_and(|n| n.text() == struct_name))
        })
        .ok_or_else(|| AppError::General(format!("Struct '{}' not found", struct_name)))?;

    parse_struct_node(&struct_def, struct_name).ok_or_else(|| {
        AppError::UnsupportedType(format!("tuple struct '{}' has no named fields", struct_name))
    })
}

/// Returns `None` for tuple structs.
fn parse_struct_node(struct_def: &ast::Struct, name: &str) -> Option<ParsedStruct> {
    let struct_attrs = extract_attributes(struct_def.syntax());
    let mut fields = Vec::new();

    match struct_def.field_list() {
        Some(ast::FieldList::RecordFieldList(list)) => {
            for field in list.fields() {
                if let (Some(fname), Some(ty)) = (field.name(), field.ty()) {
                    let attrs = extract_attributes(field.syntax());
                    fields.push(ParsedField {
                        name: fname.text().to_string(),
                        ty: ty.syntax().text().to_string(),
                        rename: attrs.rename,
                        is_skipped: attrs.is_skipped,
                        has_default: attrs.has_default,
                    });
                }
            }
        }
        Some(ast::FieldList::TupleFieldList(_)) => return None,
        None => {}
    }

    Some(ParsedStruct {
        name: name.to_string(),
        rename: struct_attrs.rename,
        has_default: struct_attrs.has_default,
        fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_rename_field() {
        let code = r#"
            struct User {
                #[serde(rename = "userId")]
                id: i32
            }
        "#;
        let s = extract_struct(code, "User").unwrap();
        assert_eq!(s.fields[0].name, "id");
        assert_eq!(s.fields[0].wire_name(), "userId");
        assert!(!s.fields[0].is_skipped);
    }

    #[test]
    fn test_extract_structs_in_order() {
        let code = r#"
            struct Point(i32, i32);
            struct Marker;
            #[serde(default)]
            struct Settings { verbose: bool }
            enum Mode { A, B }
            struct Owner { settings: Settings }
        "#;
        let structs = extract_structs(code).unwrap();
        let names: Vec<_> = structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Marker", "Settings", "Owner"]);
        assert!(structs[0].fields.is_empty());
        assert!(structs[1].has_default);
        assert_eq!(structs[2].fields[0].ty, "Settings");
    }

    #[test]
    fn test_missing_struct() {
        let err = extract_struct("struct A { x: i32 }", "Nope").unwrap_err();
        assert!(matches!(err, AppError::General(msg) if msg.contains("'Nope' not found")));
    }

    #[test]
    fn test_tuple_struct_rejected() {
        let err = extract_struct("struct Id(u64);", "Id").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedType(_)));
    }

    #[test]
    fn test_multiline_type_text() {
        let code = "struct Wide { items: Vec<\n Option<String>\n> }";
        let s = extract_struct(code, "Wide").unwrap();
        assert!(s.fields[0].ty.starts_with("Vec<"));
    }
}
