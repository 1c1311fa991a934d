#![deny(missing_docs)]

//! # OpenAPI Document Loading
//!
//! Parses YAML/JSON text into a [`Document`], classifying the dialect once:
//! Swagger 2.0 documents become [`Document::Legacy`], OpenAPI 3.x documents
//! become [`Document::Modern`].

use crate::error::{AppError, AppResult};
use crate::oas::shims::{deserialize_webhooks, OperationTag, PathItems, Server};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Metadata about the API (Info Object). Only the title is typed.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Info {
    /// The title of the API.
    #[serde(default)]
    pub title: Option<String>,
    /// Version, description, contact, license, extensions, ...
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A Swagger 2.0 document. URLs are built from `host` + `basePath`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LegacyDocument {
    /// Swagger version (e.g. "2.0").
    pub swagger: String,
    /// Metadata about the API.
    #[serde(default)]
    pub info: Option<Info>,
    /// Host (name or IP) serving the API.
    #[serde(default)]
    pub host: Option<String>,
    /// Base path prepended to all paths.
    #[serde(rename = "basePath", default)]
    pub base_path: Option<String>,
    /// Path items.
    #[serde(default)]
    pub paths: Option<PathItems>,
    /// Tags used by the document with additional metadata.
    #[serde(default)]
    pub tags: Option<Vec<OperationTag>>,
}

/// An OpenAPI 3.x document. URLs come from `servers` lists.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ModernDocument {
    /// OpenAPI version (e.g. "3.1.0").
    pub openapi: String,
    /// Metadata about the API.
    #[serde(default)]
    pub info: Option<Info>,
    /// Document-level server list.
    #[serde(default)]
    pub servers: Option<Vec<Server>>,
    /// Path items.
    #[serde(default)]
    pub paths: Option<PathItems>,
    /// Webhook items (OAS 3.1+).
    #[serde(default, deserialize_with = "deserialize_webhooks")]
    pub webhooks: Option<PathItems>,
    /// Tags used by the document with additional metadata.
    #[serde(default)]
    pub tags: Option<Vec<OperationTag>>,
}

/// A loaded API description, by dialect.
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    /// Swagger 2.0.
    Legacy(LegacyDocument),
    /// OpenAPI 3.x.
    Modern(ModernDocument),
}

impl Document {
    /// The `paths` object, if present.
    pub fn paths(&self) -> Option<&PathItems> {
        match self {
            Document::Legacy(doc) => doc.paths.as_ref(),
            Document::Modern(doc) => doc.paths.as_ref(),
        }
    }

    /// The `webhooks` object. Always `None` for Swagger 2.0.
    pub fn webhooks(&self) -> Option<&PathItems> {
        match self {
            Document::Legacy(_) => None,
            Document::Modern(doc) => doc.webhooks.as_ref(),
        }
    }

    /// The top-level tag list, if present.
    pub fn tags(&self) -> Option<&[OperationTag]> {
        match self {
            Document::Legacy(doc) => doc.tags.as_deref(),
            Document::Modern(doc) => doc.tags.as_deref(),
        }
    }

    /// The document-level server list. Always `None` for Swagger 2.0.
    pub fn servers(&self) -> Option<&[Server]> {
        match self {
            Document::Legacy(_) => None,
            Document::Modern(doc) => doc.servers.as_deref(),
        }
    }

    /// The API title from the Info Object.
    pub fn title(&self) -> Option<&str> {
        let info = match self {
            Document::Legacy(doc) => doc.info.as_ref(),
            Document::Modern(doc) => doc.info.as_ref(),
        };
        info.and_then(|info| info.title.as_deref())
    }

    /// Classifies a raw document value and reads it.
    ///
    /// A `swagger` member marks the legacy dialect; otherwise an `openapi`
    /// member is required.
    pub fn from_value(value: Value) -> AppResult<Self> {
        let Value::Object(root) = &value else {
            return Err(AppError::General(
                "Invalid OpenAPI document: root must be a mapping.".into(),
            ));
        };

        if let Some(version) = root.get("swagger") {
            let version = version_string(version);
            if !version.starts_with("2.") {
                return Err(AppError::General(format!(
                    "Unsupported Swagger version: {}. Only 2.0 is supported for legacy compatibility.",
                    version
                )));
            }
            let doc: LegacyDocument =
                serde_json::from_value(with_version(value, "swagger", version)).map_err(|e| {
                    AppError::General(format!("Failed to read Swagger document: {}", e))
                })?;
            return Ok(Document::Legacy(doc));
        }

        if let Some(version) = root.get("openapi") {
            let version = version_string(version);
            if !version.starts_with("3.") {
                return Err(AppError::General(format!(
                    "Unsupported OpenAPI version: {}. Only 3.x is supported by this parser.",
                    version
                )));
            }
            let doc: ModernDocument =
                serde_json::from_value(with_version(value, "openapi", version)).map_err(|e| {
                    AppError::General(format!("Failed to read OpenAPI document: {}", e))
                })?;
            return Ok(Document::Modern(doc));
        }

        Err(AppError::General(
            "Invalid OpenAPI document: missing 'openapi' or 'swagger' version field.".into(),
        ))
    }
}

/// Parses a YAML or JSON OpenAPI/Swagger document.
pub fn load_document(content: &str) -> AppResult<Document> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::General(format!("Failed to parse OpenAPI YAML: {}", e)))?;
    // Going through serde_yaml::Value keeps non-string keys (e.g. `200:`) readable.
    let value = serde_json::to_value(yaml)
        .map_err(|e| AppError::General(format!("Failed to parse OpenAPI YAML: {}", e)))?;
    Document::from_value(value)
}

/// Reads and parses a document from disk.
pub fn load_document_file(path: impl AsRef<Path>) -> AppResult<Document> {
    let content = fs::read_to_string(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), "loaded API description");
    load_document(&content)
}

// `swagger: 2.0` unquoted reads as a number.
fn version_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn with_version(mut value: Value, key: &str, version: String) -> Value {
    if let Value::Object(root) = &mut value {
        root.insert(key.to_string(), Value::String(version));
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_modern_document() {
        let yaml = r#"
openapi: 3.1.0
info: {title: Petstore, version: 1.0}
servers:
  - url: https://petstore.example.com/v1
    description: Production
tags:
  - name: pets
    description: Everything about pets
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        200: {description: ok}
webhooks:
  newPet:
    post:
      responses: { '200': {description: ok} }
"#;
        let doc = load_document(yaml).unwrap();
        assert!(matches!(doc, Document::Modern(_)));
        assert_eq!(doc.title(), Some("Petstore"));
        assert_eq!(doc.servers().map(<[Server]>::len), Some(1));
        assert_eq!(doc.tags().map(<[OperationTag]>::len), Some(1));
        assert_eq!(doc.paths().map(|p| p.items.len()), Some(1));
        assert_eq!(doc.webhooks().map(|w| w.items.len()), Some(1));
    }

    #[test]
    fn test_load_legacy_document() {
        let yaml = r#"
swagger: 2.0
info: {title: Legacy, version: 1.0}
host: api.example.com
basePath: /v1
paths:
  /legacy:
    get:
      responses: { '200': {description: OK} }
"#;
        let doc = load_document(yaml).unwrap();
        let Document::Legacy(legacy) = &doc else {
            panic!("expected the legacy dialect");
        };
        assert_eq!(legacy.swagger, "2.0");
        assert_eq!(legacy.host.as_deref(), Some("api.example.com"));
        assert_eq!(legacy.base_path.as_deref(), Some("/v1"));
        assert!(doc.webhooks().is_none());
        assert!(doc.servers().is_none());
    }

    #[test]
    fn test_load_json_document() {
        let json = r#"{"openapi": "3.0.3", "info": {"title": "J"}, "paths": {}}"#;
        let doc = load_document(json).unwrap();
        assert!(doc.paths().is_some_and(|p| p.is_empty()));
        assert!(doc.webhooks().is_none());
    }

    #[test]
    fn test_missing_version_fails() {
        let res = load_document("info: {title: Missing Version}\npaths: {}\n");
        match res.unwrap_err() {
            AppError::General(msg) => assert!(msg.contains("missing 'openapi' or 'swagger'")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_unsupported_versions_fail() {
        assert!(load_document("openapi: 4.0.0\n").is_err());
        assert!(load_document("swagger: '1.2'\n").is_err());
        assert!(load_document("- just\n- a list\n").is_err());
        assert!(load_document("openapi: [unterminated").is_err());
    }

    #[test]
    fn test_load_document_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "openapi: 3.0.0\ninfo: {{title: File}}\n").unwrap();
        let doc = load_document_file(file.path()).unwrap();
        assert_eq!(doc.title(), Some("File"));

        let missing = load_document_file(file.path().with_extension("absent"));
        assert!(matches!(missing, Err(AppError::Io(_))));
    }
}
