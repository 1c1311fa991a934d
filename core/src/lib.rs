#![deny(missing_docs)]

//! # API Navigation Core
//!
//! Discovers the operations of an OpenAPI/Swagger document, assigns each a
//! stable slug and title, groups them by tag and resolves their base URLs.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) document model, grouping and URL resolution.
pub mod oas;

/// Sidebar tree construction.
pub mod navigation;

pub use error::{AppError, AppResult};
pub use navigation::{
    build_navigation, NavigationGroup, NavigationItem, NavigationLink, SchemaConfig,
};
pub use oas::{
    get_operation_urls, get_operations_by_tag, get_webhooks_operations, is_operation_defined,
    load_document, load_document_file, Document, HttpMethod, OperationTag, OperationUrl,
    PathItemOperation, TagOperations,
};
