#![deny(missing_docs)]

//! # Operation Grouping
//!
//! Walks `paths` and `webhooks`, turning every defined operation into a
//! [`PathItemOperation`] with a stable slug and title.
//!
//! Path operations are bucketed by tag, sorted by title, and the buckets are
//! ordered by tag name. Webhook operations stay in discovery order.

use crate::oas::document::Document;
use crate::oas::naming::{locale_compare, slug};
use crate::oas::operations::{defined_operation, PathItemOperation, OPERATION_HTTP_METHODS};
use crate::oas::shims::{OperationTag, PathItem, PathItems};
use indexmap::IndexMap;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

/// Tag used for operations that declare none.
pub const DEFAULT_OPERATION_TAG: &str = "Operations";

/// The operations grouped under one tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagOperations<'a> {
    /// Tag metadata: the document's own tag object when one matches, otherwise
    /// a bare tag built from the name.
    pub tag: Cow<'a, OperationTag>,
    /// Operations sorted by title.
    pub entries: Vec<PathItemOperation<'a>>,
}

/// Groups every path operation by tag.
///
/// Within a path item, operations whose effective id (the `operationId`, or
/// the path when absent) collides with another method's get the method
/// appended to both slug and title.
pub fn get_operations_by_tag(document: &Document) -> IndexMap<String, TagOperations<'_>> {
    let mut operations_by_tag: HashMap<&str, TagOperations<'_>> = HashMap::new();

    for (path, path_item) in well_formed(document.paths(), "path") {
        let operation_ids = OPERATION_HTTP_METHODS.map(|method| {
            defined_operation(path_item, method)
                .map(|operation| operation.operation_id.as_deref().unwrap_or(path))
        });

        for (index, method) in OPERATION_HTTP_METHODS.into_iter().enumerate() {
            let Some(operation_id) = operation_ids[index].filter(|id| !id.is_empty()) else {
                continue;
            };
            let Some(operation) = defined_operation(path_item, method) else {
                continue;
            };

            let is_duplicate_operation_id = operation_ids
                .iter()
                .filter(|id| **id == Some(operation_id))
                .count()
                > 1;
            let operation_id_slug = slug(operation_id);

            let (entry_slug, title) = if is_duplicate_operation_id {
                (
                    format!("operations/{}/{}", operation_id_slug, slug(method.as_str())),
                    format!("{} ({})", operation_id, method.label()),
                )
            } else {
                (
                    format!("operations/{}", operation_id_slug),
                    operation_id.to_string(),
                )
            };

            let tags: Vec<&str> = match operation.tags.as_deref() {
                Some(tags) if !tags.is_empty() => tags.iter().map(String::as_str).collect(),
                _ => vec![DEFAULT_OPERATION_TAG],
            };

            for tag in tags {
                operations_by_tag
                    .entry(tag)
                    .or_insert_with(|| TagOperations {
                        tag: Cow::Owned(OperationTag::new(tag)),
                        entries: Vec::new(),
                    })
                    .entries
                    .push(PathItemOperation {
                        method,
                        operation,
                        path: Some(path),
                        path_item,
                        slug: entry_slug.clone(),
                        title: title.clone(),
                    });
            }
        }
    }

    // Later duplicates of a tag name win, after sorting by name.
    let mut document_tags: Vec<&OperationTag> =
        document.tags().unwrap_or_default().iter().collect();
    document_tags.sort_by(|a, b| locale_compare(&a.name, &b.name));
    let document_tags: HashMap<&str, &OperationTag> = document_tags
        .into_iter()
        .map(|tag| (tag.name.as_str(), tag))
        .collect();

    let mut tag_names: Vec<&str> = operations_by_tag.keys().copied().collect();
    tag_names.sort_by(|a, b| locale_compare(a, b));

    let mut ordered = IndexMap::with_capacity(tag_names.len());
    for name in tag_names {
        let Some(mut operations) = operations_by_tag.remove(name) else {
            continue;
        };
        operations
            .entries
            .sort_by(|a, b| locale_compare(&a.title, &b.title));
        if let Some(tag) = document_tags.get(name) {
            operations.tag = Cow::Borrowed(*tag);
        }
        tracing::trace!(tag = name, entries = operations.entries.len(), "grouped operations");
        ordered.insert(name.to_string(), operations);
    }

    ordered
}

/// Lists every webhook operation in document order.
///
/// The effective id is the `operationId`, or the webhook key when absent.
/// Swagger 2.0 documents and documents without `webhooks` yield nothing.
pub fn get_webhooks_operations(document: &Document) -> Vec<PathItemOperation<'_>> {
    let mut operations = Vec::new();

    for (webhook_key, path_item) in well_formed(document.webhooks(), "webhook") {
        for (method, operation) in path_item.operations() {
            let operation_id = operation.operation_id.as_deref().unwrap_or(webhook_key);

            operations.push(PathItemOperation {
                method,
                operation,
                path: None,
                path_item,
                slug: format!("webhooks/{}", slug(operation_id)),
                title: operation_id.to_string(),
            });
        }
    }

    operations
}

fn well_formed<'a>(
    items: Option<&'a PathItems>,
    kind: &'static str,
) -> impl Iterator<Item = (&'a str, &'a PathItem)> {
    items
        .into_iter()
        .flat_map(PathItems::iter)
        .filter_map(move |(key, entry)| match entry.as_path_item() {
            Some(path_item) => Some((key, path_item)),
            None => {
                tracing::debug!(key, kind, "skipping malformed path item");
                None
            }
        })
}
