#![deny(missing_docs)]

//! # Navigation Command
//!
//! Builds the sidebar tree for one document.

use std::path::PathBuf;

use apinav_core::{build_navigation, AppResult, SchemaConfig};

use crate::output::{read_document, write_json};

/// Arguments for the navigation command.
#[derive(clap::Args, Debug, Clone)]
pub struct NavArgs {
    /// Path to the OpenAPI/Swagger document (YAML or JSON).
    pub schema: PathBuf,

    /// Base path of the generated pages (e.g. `api/petstore`).
    #[clap(long, env = "APINAV_BASE")]
    pub base: String,

    /// Sidebar label. Defaults to the document title.
    #[clap(long)]
    pub label: Option<String>,

    /// Start sidebar groups expanded.
    #[clap(long)]
    pub expanded: bool,

    /// Show HTTP method badges next to operation links.
    #[clap(long)]
    pub method_badges: bool,

    /// Write the JSON here instead of stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

impl NavArgs {
    fn config(&self) -> AppResult<SchemaConfig> {
        SchemaConfig {
            base: self.base.clone(),
            collapsed: !self.expanded,
            label: self.label.clone(),
            schema: self.schema.to_string_lossy().to_string(),
            sidebar_method_badges: self.method_badges,
        }
        .normalized()
    }
}

/// Executes the navigation build.
pub fn execute(args: &NavArgs) -> AppResult<()> {
    let config = args.config()?;
    let document = read_document(&args.schema)?;
    let navigation = build_navigation(&config, &document);
    write_json(&navigation, args.output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(schema: PathBuf, base: &str, output: Option<PathBuf>) -> NavArgs {
        NavArgs {
            schema,
            base: base.to_string(),
            label: None,
            expanded: true,
            method_badges: true,
            output,
        }
    }

    #[test]
    fn test_execute_writes_navigation() {
        let dir = tempdir().unwrap();
        let schema = dir.path().join("petstore.yaml");
        let output = dir.path().join("nav.json");
        fs::write(
            &schema,
            "swagger: '2.0'\ninfo: {title: Legacy}\npaths:\n  /pets:\n    get: {operationId: listPets}\n",
        )
        .unwrap();

        execute(&args(schema, "/api/legacy/", Some(output.clone()))).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["label"], "Legacy");
        assert_eq!(json["collapsed"], false);
        assert_eq!(json["items"][0]["link"], "/api/legacy/");
        let operation = &json["items"][1]["items"][0];
        assert_eq!(operation["link"], "/api/legacy/operations/listpets/");
        assert_eq!(operation["badge"], "GET");
    }

    #[test]
    fn test_empty_base_is_rejected() {
        let dir = tempdir().unwrap();
        let err = execute(&args(dir.path().join("x.yaml"), "/", None)).unwrap_err();
        assert!(err.to_string().contains("'base' must not be empty"));
    }
}
