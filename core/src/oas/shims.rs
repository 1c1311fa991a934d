#![deny(missing_docs)]

//! # Document Shims
//!
//! Loosely typed structures mapping directly to OpenAPI/Swagger YAML objects.
//!
//! Only the members the grouping and URL logic needs are typed. Everything else
//! is kept in raw `extra` maps so renderers further downstream can still reach
//! parameters, responses and the like.

use crate::oas::operations::{HttpMethod, OPERATION_HTTP_METHODS};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// An object representing a Server (OAS 3.x).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Server {
    /// A URL to the target host.
    pub url: String,
    /// An optional string describing the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Variables, extensions and anything else.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Server {
    /// Creates a server entry with no description.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Allows referencing an external resource for extended documentation.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ExternalDocs {
    /// A description of the target documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The URL for the target documentation.
    pub url: String,
}

/// Adds metadata to a single tag that is used by the Operation Object.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct OperationTag {
    /// The name of the tag.
    pub name: String,
    /// A description for the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional external documentation for this tag.
    #[serde(
        rename = "externalDocs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_docs: Option<ExternalDocs>,
    /// Extensions and newer tag members (summary, parent, kind).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OperationTag {
    /// Creates a bare tag carrying only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            external_docs: None,
            extra: BTreeMap::new(),
        }
    }

    /// Returns true when the tag is only a grouping label: no (or an empty)
    /// description and no external documentation.
    pub fn is_minimal(&self) -> bool {
        self.description.as_deref().map_or(true, str::is_empty) && self.external_docs.is_none()
    }
}

/// A single API operation.
///
/// Read leniently: a typed member with the wrong shape is moved into `extra`
/// instead of failing the operation.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Operation {
    /// Unique string used to identify the operation.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// A short summary of what the operation does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// A verbose explanation of the operation behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags used for grouping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Alternative server array for this operation (OAS 3.x).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,
    /// Whether this operation is deprecated.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
    /// Parameters, request bodies, responses, extensions, ill-typed members, ...
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Operation {
    /// Creates an operation with the given `operationId`.
    pub fn with_id(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: Some(operation_id.into()),
            ..Self::default()
        }
    }

    /// Reads an operation from a raw method value.
    ///
    /// Anything that is not an object yields an empty operation.
    pub fn from_value(value: &Value) -> Self {
        let mut operation = Operation::default();
        let Value::Object(map) = value else {
            return operation;
        };

        for (key, raw) in map {
            let accepted = match key.as_str() {
                "operationId" => read(raw).map(|v| operation.operation_id = v),
                "summary" => read(raw).map(|v| operation.summary = v),
                "description" => read(raw).map(|v| operation.description = v),
                "tags" => read(raw).map(|v| operation.tags = v),
                "servers" => read(raw).map(|v| operation.servers = v),
                "deprecated" => read(raw).map(|v| operation.deprecated = v),
                _ => None,
            };
            if accepted.is_none() {
                operation.extra.insert(key.clone(), raw.clone());
            }
        }
        operation
    }
}

fn read<T: DeserializeOwned>(raw: &Value) -> Option<T> {
    T::deserialize(raw).ok()
}

/// A Path Item containing operations for a specific URL/Webhook.
///
/// Only the eight fixed HTTP method keys are operations. A method key is
/// present whatever it holds; `null` or scalar values give an empty `Operation`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathItem {
    operations: BTreeMap<HttpMethod, Operation>,
    /// Alternative server array for this path item (OAS 3.x).
    pub servers: Option<Vec<Server>>,
    /// Summary, description, parameters, `$ref`, extensions, ...
    pub extra: BTreeMap<String, Value>,
}

impl PathItem {
    /// Builds a path item from a raw mapping value.
    ///
    /// Returns `None` only when the value is not object-shaped. An unreadable
    /// `servers` member reads as absent and is kept in `extra`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Object(map) = value else {
            return None;
        };

        let mut item = PathItem::default();
        for (key, raw) in map {
            if let Some(method) = HttpMethod::from_key(key) {
                item.operations.insert(method, Operation::from_value(raw));
                continue;
            }
            if key == "servers" {
                if let Some(servers) = read(raw) {
                    item.servers = servers;
                    continue;
                }
            }
            item.extra.insert(key.clone(), raw.clone());
        }
        Some(item)
    }

    /// Adds (or replaces) the operation bound to `method`.
    pub fn with_operation(mut self, method: HttpMethod, operation: Operation) -> Self {
        self.operations.insert(method, operation);
        self
    }

    /// Sets the path-item level server list.
    pub fn with_servers(mut self, servers: Vec<Server>) -> Self {
        self.servers = Some(servers);
        self
    }

    /// Returns the operation bound to `method`, if the key is present.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations.get(&method)
    }

    /// Iterates over present operations in fixed method order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        self.operations.iter().map(|(method, op)| (*method, op))
    }
}

impl Serialize for PathItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = self.operations.len() + self.extra.len() + usize::from(self.servers.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for method in OPERATION_HTTP_METHODS {
            if let Some(operation) = self.operations.get(&method) {
                map.serialize_entry(method.as_str(), operation)?;
            }
        }
        if let Some(servers) = &self.servers {
            map.serialize_entry("servers", servers)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One entry of a Paths or Webhooks object.
#[derive(Clone, Debug, PartialEq)]
pub enum PathItemEntry {
    /// A well-formed path item.
    Item(PathItem),
    /// A value that is not object-shaped (scalar, array, null), kept verbatim.
    Malformed(Value),
}

impl PathItemEntry {
    /// Returns the path item when the entry is well-formed.
    pub fn as_path_item(&self) -> Option<&PathItem> {
        match self {
            PathItemEntry::Item(item) => Some(item),
            PathItemEntry::Malformed(_) => None,
        }
    }
}

impl From<PathItem> for PathItemEntry {
    fn from(item: PathItem) -> Self {
        PathItemEntry::Item(item)
    }
}

impl From<Value> for PathItemEntry {
    fn from(value: Value) -> Self {
        match PathItem::from_value(&value) {
            Some(item) => PathItemEntry::Item(item),
            None => PathItemEntry::Malformed(value),
        }
    }
}

impl<'de> Deserialize<'de> for PathItemEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(PathItemEntry::from)
    }
}

impl Serialize for PathItemEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PathItemEntry::Item(item) => item.serialize(serializer),
            PathItemEntry::Malformed(raw) => raw.serialize(serializer),
        }
    }
}

/// Represents the Paths or Webhooks Object.
///
/// Entries keep document order. Deserializing treats `x-` keys as
/// specification extensions, as the Paths Object does; webhooks go through
/// [`deserialize_webhooks`] where every key is an entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathItems {
    /// Entries keyed by path template or webhook name.
    pub items: IndexMap<String, PathItemEntry>,
    /// Spec extensions attached to the object (x-...).
    pub extensions: BTreeMap<String, Value>,
}

impl PathItems {
    /// Appends an entry, keeping insertion order.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<PathItemEntry>) {
        self.items.insert(key.into(), entry.into());
    }

    /// Returns true when no entries are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all entries in document order, malformed ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathItemEntry)> {
        self.items.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<K: Into<String>, E: Into<PathItemEntry>> FromIterator<(K, E)> for PathItems {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut items = PathItems::default();
        for (key, entry) in iter {
            items.insert(key, entry);
        }
        items
    }
}

impl<'de> Deserialize<'de> for PathItems {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut out = PathItems::default();

        for (key, value) in raw {
            if key.starts_with("x-") {
                out.extensions.insert(key, value);
                continue;
            }
            out.items.insert(key, PathItemEntry::from(value));
        }

        Ok(out)
    }
}

/// Reads an optional Webhooks Object. Every key, `x-` prefixed ones included,
/// names a webhook.
pub fn deserialize_webhooks<'de, D>(deserializer: D) -> Result<Option<PathItems>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IndexMap<String, Value>>::deserialize(deserializer)?;
    Ok(raw.map(|raw| raw.into_iter().collect()))
}

impl Serialize for PathItems {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.items.len() + self.extensions.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(key, value)?;
        }
        for (key, value) in &self.extensions {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
