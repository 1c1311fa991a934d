#![deny(missing_docs)]

//! # Server URL Resolution
//!
//! Computes the base URL candidates shown next to a single operation.

use crate::oas::document::Document;
use crate::oas::operations::PathItemOperation;
use serde::Serialize;

/// A resolved URL for an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationUrl {
    /// The full URL, with a protocol-relative `//` prefix removed.
    pub url: String,
    /// The server description, when the URL came from a server entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OperationUrl {
    fn new(url: &str, description: Option<&str>) -> Self {
        Self {
            url: url.strip_prefix("//").unwrap_or(url).to_string(),
            description: description.map(str::to_string),
        }
    }
}

/// Resolves the URLs an operation can be reached at.
///
/// Swagger 2.0 documents declaring `host` yield `host + basePath + path`.
/// Otherwise the first `servers` list declared on the operation, then the
/// path item, then the document is used. A declared but empty list stops the
/// lookup and yields no URLs. Empty concatenations are dropped.
pub fn get_operation_urls(
    document: &Document,
    operation: &PathItemOperation<'_>,
) -> Vec<OperationUrl> {
    let path = operation.path.unwrap_or_default();

    if let Document::Legacy(legacy) = document {
        if let Some(host) = legacy.host.as_deref() {
            let url = format!(
                "{}{}{}",
                host,
                legacy.base_path.as_deref().unwrap_or_default(),
                path
            );
            if url.is_empty() {
                return Vec::new();
            }
            return vec![OperationUrl::new(&url, None)];
        }
    }

    let servers = operation
        .operation
        .servers
        .as_deref()
        .or(operation.path_item.servers.as_deref())
        .or(document.servers())
        .unwrap_or_default();

    servers
        .iter()
        .filter_map(|server| {
            let url = format!("{}{}", server.url, path);
            (!url.is_empty()).then(|| OperationUrl::new(&url, server.description.as_deref()))
        })
        .collect()
}
