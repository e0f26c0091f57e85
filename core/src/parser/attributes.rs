//! # Attribute Operations
//!
//! Internal logic for parsing `#[serde(...)]` and `#[oai(...)]` attributes.

use ra_ap_syntax::ast::{self};
use ra_ap_syntax::{AstNode, SyntaxNode};
use regex::Regex;
use std::sync::OnceLock;

/// Helper struct for attributes extracted from a single node.
#[derive(Default, Debug)]
pub struct AttrInfo {
    /// The rename value if present.
    pub rename: Option<String>,
    /// Whether the skip flag was found.
    pub is_skipped: bool,
    /// Whether `default` (bare or `default = "path"`) was found.
    pub has_default: bool,
}

/// Analyzes attributes on a node to find `serde` or `oai` configurations.
pub fn extract_attributes(node: &SyntaxNode) -> AttrInfo {
    let mut info = AttrInfo::default();

    let attributes = node.children().filter_map(ast::Attr::cast);

    for attr in attributes {
        // We only care about "serde" or "oai" attributes for schema generation
        if let Some(meta) = attr.meta() {
            if let Some(path) = meta.path() {
                let ident = path.to_string();
                if ident == "serde" || ident == "oai" {
                    if let Some(tt) = meta.token_tree() {
                        let content = tt.to_string();
                        parse_attribute_content(&content, &mut info);
                    }
                }
            }
        }
    }

    info
}

/// Parses the inner content of an attribute.
fn parse_attribute_content(content: &str, info: &mut AttrInfo) {
    static RENAME_RE: OnceLock<Regex> = OnceLock::new();
    let rename_re = RENAME_RE
        .get_or_init(|| Regex::new(r#"\brename\s*=\s*"([^"]+)""#).expect("Invalid regex"));

    static SKIP_RE: OnceLock<Regex> = OnceLock::new();
    let skip_re = SKIP_RE.get_or_init(|| Regex::new(r#"\bskip\b"#).expect("Invalid regex"));

    static DEFAULT_RE: OnceLock<Regex> = OnceLock::new();
    let default_re =
        DEFAULT_RE.get_or_init(|| Regex::new(r#"\bdefault\b"#).expect("Invalid regex"));

    static LITERAL_RE: OnceLock<Regex> = OnceLock::new();
    let literal_re =
        LITERAL_RE.get_or_init(|| Regex::new(r#""(?:[^"\\]|\\.)*""#).expect("Invalid regex"));

    if let Some(caps) = rename_re.captures(content) {
        if let Some(val) = caps.get(1) {
            info.rename = Some(val.as_str().to_string());
        }
    }

    // Flags are bare keys; `rename = "skip"` must not count.
    let keys = literal_re.replace_all(content, "\"\"");

    if skip_re.is_match(&keys) {
        info.is_skipped = true;
    }

    if default_re.is_match(&keys) {
        info.has_default = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ra_ap_edition::Edition;
    use ra_ap_syntax::{ast, AstNode, SourceFile};

    fn parse_first_struct(code: &str) -> ast::Struct {
        let parse = SourceFile::parse(code, Edition::Edition2021);
        let file = parse.tree();
        file.syntax()
            .descendants()
            .find_map(ast::Struct::cast)
            .expect("struct missing")
    }

    fn first_field(s: &ast::Struct) -> ast::RecordField {
        s.field_list()
            .and_then(|list| match list {
                ast::FieldList::RecordFieldList(list) => list.fields().next(),
                _ => None,
            })
            .expect("field missing")
    }

    #[test]
    fn test_extract_struct_rename() {
        let code = r#"
            #[serde(rename = "UserModel")]
            struct User {
                id: i32,
            }
        "#;
        let s = parse_first_struct(code);
        let info = extract_attributes(s.syntax());
        assert_eq!(info.rename.as_deref(), Some("UserModel"));
        assert!(!info.is_skipped);
        assert!(!info.has_default);
    }

    #[test]
    fn test_rename_all_is_not_rename() {
        let code = r#"
            #[serde(rename_all = "camelCase")]
            struct User {
                id: i32,
            }
        "#;
        let s = parse_first_struct(code);
        assert!(extract_attributes(s.syntax()).rename.is_none());
    }

    #[test]
    fn test_extract_field_skip() {
        let code = r#"
            struct Secret {
                #[serde(skip)]
                token: String,
            }
        "#;
        let s = parse_first_struct(code);
        let info = extract_attributes(first_field(&s).syntax());
        assert!(info.is_skipped);
    }

    #[test]
    fn test_skip_serializing_if_is_not_skip() {
        let code = r#"
            struct Page {
                #[serde(skip_serializing_if = "Option::is_none")]
                cursor: Option<String>,
            }
        "#;
        let s = parse_first_struct(code);
        assert!(!extract_attributes(first_field(&s).syntax()).is_skipped);
    }

    #[test]
    fn test_extract_field_default() {
        let code = r#"
            struct Page {
                #[serde(default = "default_size")]
                size: u32,
            }
        "#;
        let s = parse_first_struct(code);
        assert!(extract_attributes(first_field(&s).syntax()).has_default);
    }

    #[test]
    fn test_flag_words_inside_literals_are_not_flags() {
        let code = r#"
            struct Cfg {
                #[serde(rename = "skip")]
                skip_count: i32,
                #[serde(rename = "default")]
                is_default: bool,
            }
        "#;
        let s = parse_first_struct(code);
        let infos: Vec<_> = s
            .field_list()
            .and_then(|list| match list {
                ast::FieldList::RecordFieldList(list) => Some(list),
                _ => None,
            })
            .expect("fields missing")
            .fields()
            .map(|f| extract_attributes(f.syntax()))
            .collect();

        assert_eq!(infos[0].rename.as_deref(), Some("skip"));
        assert!(!infos[0].is_skipped);
        assert!(!infos[0].has_default);
        assert_eq!(infos[1].rename.as_deref(), Some("default"));
        assert!(!infos[1].is_skipped);
        assert!(!infos[1].has_default);
    }

    #[test]
    fn test_bare_flag_beside_literal() {
        let code = r#"
            struct Page {
                #[serde(rename = "n", default)]
                size: u32,
            }
        "#;
        let s = parse_first_struct(code);
        let info = extract_attributes(first_field(&s).syntax());
        assert_eq!(info.rename.as_deref(), Some("n"));
        assert!(info.has_default);
    }

    #[test]
    fn test_ignores_non_target_attributes() {
        let code = r#"
            #[derive(Debug, Default)]
            struct Ignored {
                #[doc = "not serde"]
                value: String,
            }
        "#;
        let s = parse_first_struct(code);
        let info = extract_attributes(s.syntax());
        assert!(info.rename.is_none());
        assert!(!info.is_skipped);
        assert!(!info.has_default);
    }
}
