#![deny(missing_docs)]

//! # Specgen CLI
//!
//! Command Line Interface for the type-to-schema engine.
//!
//! Supported Commands:
//! - `schema`: Resolves structured types into `components/schemas`.
//! - `param`: Prints a Parameter Object.

use clap::{Parser, Subcommand};
use specgen_core::AppResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod param_gen;
mod schema_gen;
mod sources;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI schema generator")]
struct Cli {
    /// Log filter directive (e.g. `debug`, `specgen_core=trace`).
    #[clap(long, global = true, env = "SPECGEN_LOG", default_value = "warn")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve structured types into OpenAPI component schemas.
    Schema(schema_gen::SchemaGenArgs),
    /// Build one OpenAPI Parameter Object.
    Param(param_gen::ParamArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::new(&cli.log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &cli.command {
        Commands::Schema(args) => schema_gen::execute(args)?,
        Commands::Param(args) => param_gen::execute(args)?,
    }

    Ok(())
}
