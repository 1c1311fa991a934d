#![deny(missing_docs)]

//! # Operations
//!
//! The closed set of HTTP methods that may carry an operation on a path item,
//! the "is this method defined" predicate, and the derived
//! [`PathItemOperation`] record handed to navigation and rendering code.

use crate::oas::shims::{Operation, PathItem};
use serde::Serialize;
use std::fmt;

/// HTTP methods that can hold an Operation on a Path Item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `get`
    Get,
    /// `put`
    Put,
    /// `post`
    Post,
    /// `delete`
    Delete,
    /// `options`
    Options,
    /// `head`
    Head,
    /// `patch`
    Patch,
    /// `trace`
    Trace,
}

/// Every operation-bearing path item key, in scan order.
pub const OPERATION_HTTP_METHODS: [HttpMethod; 8] = [
    HttpMethod::Get,
    HttpMethod::Put,
    HttpMethod::Post,
    HttpMethod::Delete,
    HttpMethod::Options,
    HttpMethod::Head,
    HttpMethod::Patch,
    HttpMethod::Trace,
];

impl HttpMethod {
    /// The path item key for this method (lowercase).
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }

    /// Matches a path item key. Keys are case-sensitive, as in the document.
    pub fn from_key(key: &str) -> Option<Self> {
        OPERATION_HTTP_METHODS
            .into_iter()
            .find(|method| method.as_str() == key)
    }

    /// Upper-case label used in titles and badges (`GET`, `POST`, ...).
    pub fn label(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the operation bound to `method` when the key is present on the path item.
///
/// Presence is what counts: a key mapped to `null` yields an empty operation.
pub fn defined_operation(path_item: &PathItem, method: HttpMethod) -> Option<&Operation> {
    path_item.operation(method)
}

/// Returns true iff `method` is a present key on `path_item`.
pub fn is_operation_defined(path_item: &PathItem, method: HttpMethod) -> bool {
    defined_operation(path_item, method).is_some()
}

/// A single operation discovered on a path item or webhook, with its
/// navigation slug and human title.
///
/// Borrows the source document; nothing is copied out of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathItemOperation<'a> {
    /// The HTTP method key the operation was found under.
    pub method: HttpMethod,
    /// The operation itself.
    pub operation: &'a Operation,
    /// The routable path. Absent for webhook operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'a str>,
    /// The path item holding the operation.
    #[serde(skip)]
    pub path_item: &'a PathItem,
    /// Navigation slug (`operations/...` or `webhooks/...`).
    pub slug: String,
    /// Link text.
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_keys() {
        assert_eq!(HttpMethod::from_key("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_key("trace"), Some(HttpMethod::Trace));
        assert_eq!(HttpMethod::from_key("GET"), None);
        assert_eq!(HttpMethod::from_key("query"), None);
        assert_eq!(HttpMethod::from_key("parameters"), None);
        assert_eq!(HttpMethod::Patch.label(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_method_order_is_fixed() {
        let mut sorted = OPERATION_HTTP_METHODS;
        sorted.sort();
        assert_eq!(sorted, OPERATION_HTTP_METHODS);
    }

    #[test]
    fn test_defined_by_key_presence() {
        let item = PathItem::from_value(&json!({
            "get": {"operationId": "listPets"},
            "delete": null,
            "summary": "not an operation"
        }))
        .unwrap();

        assert!(is_operation_defined(&item, HttpMethod::Get));
        assert!(is_operation_defined(&item, HttpMethod::Delete));
        assert!(!is_operation_defined(&item, HttpMethod::Post));
        assert_eq!(
            defined_operation(&item, HttpMethod::Delete),
            Some(&Operation::default())
        );
    }
}
