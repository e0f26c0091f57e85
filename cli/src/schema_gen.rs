#![deny(missing_docs)]

//! # Schema Generation Command
//!
//! Resolves named structured types into one shared definitions table and
//! writes the `components` fragment of an OpenAPI document, alongside a
//! `schemas` map holding each requested type as resolved (a `$ref`, or the
//! full body under `--inline`).

use crate::sources::load_catalog;
use specgen_core::{AppError, AppResult, Definitions, ReferencePolicy, SchemaResolver, TypeDescriptor};
use std::fs;
use std::path::PathBuf;

/// Arguments for the schema command.
#[derive(clap::Args, Debug, Clone)]
pub struct SchemaGenArgs {
    /// Rust source files, schema documents, or directories containing them.
    #[clap(long = "source", required = true, env = "SPECGEN_SOURCES", value_delimiter = ',')]
    pub sources: Vec<PathBuf>,

    /// Lookup name of a structured type to resolve. Repeatable.
    #[clap(long = "type", required = true)]
    pub types: Vec<String>,

    /// Report each requested type inline instead of as a `$ref`.
    /// Components are registered either way.
    #[clap(long)]
    pub inline: bool,

    /// Output path. `.yaml`/`.yml` writes YAML, anything else JSON.
    /// If not provided, prints JSON to stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

/// Executes the schema generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &SchemaGenArgs) -> AppResult<()> {
    let catalog = load_catalog(&args.sources)?;
    let resolver = SchemaResolver::new(&catalog);
    let policy = if args.inline {
        ReferencePolicy::Inline
    } else {
        ReferencePolicy::Reference
    };

    let mut definitions = Definitions::new();
    let mut requested = serde_json::Map::new();
    for name in &args.types {
        let schema =
            resolver.resolve(&TypeDescriptor::named(name.as_str()), policy, &mut definitions)?;
        requested.insert(name.clone(), schema.to_value());
    }

    let document = serde_json::json!({
        "components": definitions.to_components(),
        "schemas": requested,
    });

    let yaml = args
        .output
        .as_ref()
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    let output_str = if yaml {
        serde_yaml::to_string(&document)
            .map_err(|e| AppError::General(format!("YAML serialization failed: {}", e)))?
    } else {
        serde_json::to_string_pretty(&document)
            .map_err(|e| AppError::General(format!("JSON serialization failed: {}", e)))?
    };

    if let Some(out_path) = &args.output {
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::General(format!("Failed to create output directory: {}", e))
                })?;
            }
        }
        fs::write(out_path, output_str)
            .map_err(|e| AppError::General(format!("Failed to write output file: {}", e)))?;
        tracing::info!(?out_path, components = definitions.len(), "schemas written");
    } else {
        println!("{}", output_str);
    }

    Ok(())
}
