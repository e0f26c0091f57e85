#![deny(missing_docs)]

//! # Source Loading
//!
//! Builds a `TypeCatalog` from files and directories. Each file is routed to
//! the adapter its extension selects; other files are ignored.

use specgen_core::{AppError, AppResult, SourceFormat, TypeCatalog};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Loads every recognized file under `sources` into one catalog.
///
/// Directories are walked recursively in file-name order so catalog order is stable.
pub fn load_catalog(sources: &[PathBuf]) -> AppResult<TypeCatalog> {
    let mut catalog = TypeCatalog::new();

    for source in sources {
        if !source.exists() {
            return Err(AppError::General(format!(
                "Source path not found: {:?}",
                source
            )));
        }

        let walker = WalkDir::new(source).sort_by_file_name().into_iter();
        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            match SourceFormat::from_path(path) {
                Some(format) => load_file(&mut catalog, path, format)?,
                None => debug!(?path, "ignoring unrecognized file"),
            }
        }
    }

    info!(types = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn load_file(catalog: &mut TypeCatalog, path: &Path, format: SourceFormat) -> AppResult<()> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::General(format!("Failed to read {:?}: {}", path, e)))?;
    let added = catalog.add_source(format, &content)?;
    debug!(?path, ?format, added, "loaded source");
    Ok(())
}
