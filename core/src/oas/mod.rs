#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: Loading and dialect classification.
//! - **shims**: Loosely typed document objects (path items, operations, tags, servers).
//! - **operations**: HTTP method set, the "method defined" predicate, derived operation records.
//! - **grouping**: Tag grouping of path operations and webhook extraction.
//! - **servers**: Effective base URL resolution per operation.
//! - **naming**: Slugs and human-facing ordering.

pub mod document;
pub mod grouping;
pub mod naming;
pub mod operations;
pub mod servers;
pub mod shims;

pub use document::{load_document, load_document_file, Document, LegacyDocument, ModernDocument};
pub use grouping::{
    get_operations_by_tag, get_webhooks_operations, TagOperations, DEFAULT_OPERATION_TAG,
};
pub use operations::{
    defined_operation, is_operation_defined, HttpMethod, PathItemOperation, OPERATION_HTTP_METHODS,
};
pub use servers::{get_operation_urls, OperationUrl};
pub use shims::{Operation, OperationTag, PathItem, PathItemEntry, PathItems, Server};
