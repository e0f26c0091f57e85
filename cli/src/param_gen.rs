#![deny(missing_docs)]

//! # Parameter Command
//!
//! Prints one OpenAPI Parameter Object as JSON.

use crate::sources::load_catalog;
use specgen_core::{
    AppError, AppResult, Definitions, Parameter, ParameterBuilder, RustTypeMapper, SchemaResolver,
    TypeCatalog, TypeMapper,
};
use std::path::PathBuf;

/// Arguments for the param command.
#[derive(clap::Args, Debug, Clone)]
pub struct ParamArgs {
    /// Parameter name.
    #[clap(long)]
    pub name: String,

    /// Parameter location: query, path, header or cookie.
    #[clap(long)]
    pub location: String,

    /// Rust type of the value (e.g. `i64`, `Vec<String>`, `Filter`).
    /// Omit for an unconstrained schema.
    #[clap(long = "type")]
    pub rust_type: Option<String>,

    /// Default value as a JSON literal (e.g. `10`, `"asc"`).
    #[clap(long)]
    pub default: Option<String>,

    /// Mark the parameter as not required.
    #[clap(long)]
    pub optional: bool,

    /// Sources providing structured types referenced by `--type`.
    #[clap(long = "source", env = "SPECGEN_SOURCES", value_delimiter = ',')]
    pub sources: Vec<PathBuf>,
}

/// Builds the parameter described by `args`.
pub fn build(args: &ParamArgs) -> AppResult<Parameter> {
    let catalog = if args.sources.is_empty() {
        TypeCatalog::new()
    } else {
        load_catalog(&args.sources)?
    };
    let resolver = SchemaResolver::new(&catalog);

    let mut builder = ParameterBuilder::new(args.name.as_str(), args.location.as_str())
        .required(!args.optional);
    if let Some(rust_type) = &args.rust_type {
        builder = builder.schema_type(RustTypeMapper.map(rust_type)?);
    }
    if let Some(raw) = &args.default {
        let default = serde_json::from_str(raw).map_err(|e| {
            AppError::General(format!("--default must be a JSON literal: {}", e))
        })?;
        builder = builder.default_value(default);
    }

    builder.build(&resolver, &mut Definitions::new())
}

/// Executes the param command.
pub fn execute(args: &ParamArgs) -> AppResult<()> {
    let parameter = build(args)?;
    let output = serde_json::to_string_pretty(&parameter)
        .map_err(|e| AppError::General(format!("JSON serialization failed: {}", e)))?;
    println!("{}", output);
    Ok(())
}
