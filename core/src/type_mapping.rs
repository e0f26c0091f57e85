#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts Rust type strings into `TypeDescriptor`s.
//! Handles primitives, collections (Vec, sets), optionality (Option), smart
//! pointers, and falls back to named structured types for user paths.

use crate::descriptor::{Primitive, TypeDescriptor};
use crate::error::{AppError, AppResult};
// Import HasGenericArgs to access .generic_arg_list() on PathSegments
use ra_ap_edition::Edition;
use ra_ap_syntax::ast::{self, HasGenericArgs};
use ra_ap_syntax::{AstNode, SourceFile};

/// Trait for converting Rust type strings to type descriptors.
pub trait TypeMapper {
    /// Maps a Rust type string (e.g., `Option<Vec<User>>`) to a descriptor.
    fn map(&self, rust_type: &str) -> AppResult<TypeDescriptor>;
}

/// A standard implementation of `TypeMapper`.
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn map(&self, rust_type: &str) -> AppResult<TypeDescriptor> {
        // Wrap in a type alias so the parser sees a complete item
        let code = format!("type _Wrapper = {};", rust_type);
        let parse = SourceFile::parse(&code, Edition::Edition2021);
        let file = parse.tree();

        let type_alias = file
            .syntax()
            .descendants()
            .find_map(ast::TypeAlias::cast)
            .ok_or_else(|| AppError::UnsupportedType(rust_type.to_string()))?;

        let root_type = type_alias
            .ty()
            .ok_or_else(|| AppError::UnsupportedType(rust_type.to_string()))?;

        map_ast_type(&root_type)
    }
}

/// Recursively maps an AST Type node to a descriptor.
fn map_ast_type(ty: &ast::Type) -> AppResult<TypeDescriptor> {
    match ty {
        ast::Type::PathType(path_type) => {
            let segment = path_type
                .path()
                .and_then(|path| path.segment())
                .ok_or_else(|| unsupported(ty))?;
            let name_ref = segment.name_ref().ok_or_else(|| unsupported(ty))?;
            let name = name_ref.text();

            match name.as_str() {
                "String" | "str" | "char" | "Uuid" => Ok(primitive(Primitive::String)),
                "bool" => Ok(primitive(Primitive::Boolean)),
                "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
                | "u128" | "usize" => Ok(primitive(Primitive::Integer)),
                "f32" | "f64" => Ok(primitive(Primitive::Number)),
                "NaiveDate" => Ok(primitive(Primitive::Date)),
                "NaiveDateTime" | "DateTime" => Ok(primitive(Primitive::DateTime)),
                "Value" => Ok(TypeDescriptor::Any),

                "Option" => Ok(TypeDescriptor::Optional(Box::new(
                    first_type_arg(&segment)?.ok_or_else(|| unsupported(ty))?,
                ))),
                "Vec" | "VecDeque" | "HashSet" | "BTreeSet" => Ok(TypeDescriptor::List(
                    first_type_arg(&segment)?.map(Box::new),
                )),
                "Box" | "Rc" | "Arc" => first_type_arg(&segment)?.ok_or_else(|| unsupported(ty)),

                // User defined structs become named references
                other => Ok(TypeDescriptor::Named(other.to_string())),
            }
        }
        ast::Type::RefType(ref_type) => {
            let inner = ref_type.ty().ok_or_else(|| unsupported(ty))?;
            map_ast_type(&inner)
        }
        ast::Type::ParenType(paren) => {
            let inner = paren.ty().ok_or_else(|| unsupported(ty))?;
            map_ast_type(&inner)
        }
        _ => Err(unsupported(ty)),
    }
}

/// Maps the first generic argument of a segment, if the segment has any.
fn first_type_arg(segment: &ast::PathSegment) -> AppResult<Option<TypeDescriptor>> {
    let Some(generic_args) = segment.generic_arg_list() else {
        return Ok(None);
    };

    match generic_args.generic_args().next() {
        None => Ok(None),
        Some(ast::GenericArg::TypeArg(type_arg)) => {
            let inner_ty = type_arg.ty().ok_or_else(|| {
                AppError::UnsupportedType(type_arg.syntax().text().to_string())
            })?;
            map_ast_type(&inner_ty).map(Some)
        }
        Some(other) => Err(AppError::UnsupportedType(other.syntax().text().to_string())),
    }
}

fn primitive(p: Primitive) -> TypeDescriptor {
    TypeDescriptor::Primitive(p)
}

fn unsupported(ty: &ast::Type) -> AppError {
    AppError::UnsupportedType(ty.syntax().text().to_string())
}
