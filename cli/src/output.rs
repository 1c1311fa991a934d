#![deny(missing_docs)]

//! # Output Helpers
//!
//! Shared input/output plumbing for every subcommand.

use std::fs;
use std::path::{Path, PathBuf};

use apinav_core::{load_document_file, AppError, AppResult, Document};
use serde::Serialize;

/// Loads the API description, failing early with a readable message when it is missing.
pub fn read_document(schema_path: &Path) -> AppResult<Document> {
    if !schema_path.exists() {
        return Err(AppError::General(format!(
            "API description not found: {:?}",
            schema_path
        )));
    }
    load_document_file(schema_path)
}

/// Writes `value` as pretty JSON to `output`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::General(format!("Failed to serialize output: {}", e)))?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            tracing::info!(path = ?path, "wrote output");
        }
        None => println!("{}", json),
    }

    Ok(())
}
