#![deny(missing_docs)]

//! # Navigation Tree
//!
//! Turns the grouped operations of one API description into a serializable
//! sidebar tree: an overview link, one group per tag, then webhooks.

use crate::error::{AppError, AppResult};
use crate::oas::document::Document;
use crate::oas::grouping::{get_operations_by_tag, get_webhooks_operations, TagOperations};
use crate::oas::naming::slug;
use crate::oas::operations::PathItemOperation;
use crate::oas::shims::OperationTag;
use serde::{Deserialize, Serialize};

/// Label used when neither the config nor the document provides one.
const FALLBACK_LABEL: &str = "API";

/// Settings for one documented API description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaConfig {
    /// Base path of the generated pages (e.g. `api/petstore`).
    pub base: String,
    /// Whether the generated sidebar groups start collapsed.
    #[serde(default = "default_collapsed")]
    pub collapsed: bool,
    /// Sidebar label. Defaults to the document title.
    #[serde(default)]
    pub label: Option<String>,
    /// Path or URL of the API description.
    pub schema: String,
    /// Show the HTTP method next to each operation link.
    #[serde(default)]
    pub sidebar_method_badges: bool,
}

fn default_collapsed() -> bool {
    true
}

impl SchemaConfig {
    /// Creates a config with default flags, validated and normalized.
    pub fn new(base: impl Into<String>, schema: impl Into<String>) -> AppResult<Self> {
        Self {
            base: base.into(),
            collapsed: default_collapsed(),
            label: None,
            schema: schema.into(),
            sidebar_method_badges: false,
        }
        .normalized()
    }

    /// Strips leading/trailing slashes from `base` and rejects empty values.
    pub fn normalized(mut self) -> AppResult<Self> {
        self.base = self.base.trim_matches('/').to_string();
        if self.base.is_empty() {
            return Err(AppError::General(
                "Schema config 'base' must not be empty.".into(),
            ));
        }
        if self.schema.is_empty() {
            return Err(AppError::General(
                "Schema config 'schema' must not be empty.".into(),
            ));
        }
        Ok(self)
    }

    fn link(&self, slug: &str) -> String {
        if slug.is_empty() {
            format!("/{}/", self.base)
        } else {
            format!("/{}/{}/", self.base, slug)
        }
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavigationItem {
    /// A page link.
    Link(NavigationLink),
    /// A nested group.
    Group(NavigationGroup),
}

/// A link to a generated page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationLink {
    /// Link text.
    pub label: String,
    /// Absolute site path.
    pub link: String,
    /// Upper-case HTTP method, when method badges are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// A collapsible group of entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationGroup {
    /// Group label.
    pub label: String,
    /// Whether the group starts collapsed.
    pub collapsed: bool,
    /// Tag metadata, for tag groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<OperationTag>,
    /// Whether the tag carries nothing beyond its name, for tag groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimal: Option<bool>,
    /// Child entries.
    pub items: Vec<NavigationItem>,
}

impl NavigationGroup {
    fn new(label: impl Into<String>, collapsed: bool, items: Vec<NavigationItem>) -> Self {
        Self {
            label: label.into(),
            collapsed,
            tag: None,
            minimal: None,
            items,
        }
    }
}

impl NavigationLink {
    fn new(label: impl Into<String>, link: String) -> Self {
        Self {
            label: label.into(),
            link,
            badge: None,
        }
    }
}

/// Builds the sidebar tree for one document.
pub fn build_navigation(config: &SchemaConfig, document: &Document) -> NavigationGroup {
    let mut items = vec![NavigationItem::Link(NavigationLink::new(
        "Overview",
        config.link(""),
    ))];

    for (name, operations) in get_operations_by_tag(document) {
        items.push(NavigationItem::Group(tag_group(config, &name, &operations)));
    }

    let webhooks = get_webhooks_operations(document);
    if !webhooks.is_empty() {
        items.push(NavigationItem::Group(NavigationGroup::new(
            "Webhooks",
            config.collapsed,
            operation_links(config, &webhooks),
        )));
    }

    let label = config
        .label
        .clone()
        .or_else(|| document.title().map(str::to_string))
        .unwrap_or_else(|| FALLBACK_LABEL.to_string());
    NavigationGroup::new(label, config.collapsed, items)
}

fn tag_group(
    config: &SchemaConfig,
    name: &str,
    operations: &TagOperations<'_>,
) -> NavigationGroup {
    let minimal = operations.tag.is_minimal();
    let mut items = Vec::with_capacity(operations.entries.len() + 1);
    // Tags without metadata get no overview page.
    if !minimal {
        items.push(NavigationItem::Link(NavigationLink::new(
            "Overview",
            config.link(&format!("operations/tags/{}", slug(name))),
        )));
    }
    items.extend(operation_links(config, &operations.entries));

    NavigationGroup {
        tag: Some(operations.tag.clone().into_owned()),
        minimal: Some(minimal),
        ..NavigationGroup::new(name, config.collapsed, items)
    }
}

fn operation_links(
    config: &SchemaConfig,
    operations: &[PathItemOperation<'_>],
) -> Vec<NavigationItem> {
    operations
        .iter()
        .map(|operation| {
            let mut link =
                NavigationLink::new(operation.title.clone(), config.link(&operation.slug));
            if config.sidebar_method_badges {
                link.badge = Some(operation.method.label());
            }
            NavigationItem::Link(link)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::document::load_document;
    use pretty_assertions::assert_eq;

    const PETSTORE: &str = r#"
openapi: 3.1.0
info: {title: Petstore, version: 1.0.0}
tags:
  - name: pets
    description: Everything about pets
paths:
  /pets:
    get: {operationId: listPets, tags: [pets]}
  /store:
    get: {operationId: getInventory, tags: [store]}
webhooks:
  newPet:
    post: {}
"#;

    fn labels(group: &NavigationGroup) -> Vec<&str> {
        group
            .items
            .iter()
            .map(|item| match item {
                NavigationItem::Link(link) => link.label.as_str(),
                NavigationItem::Group(group) => group.label.as_str(),
            })
            .collect()
    }

    fn group<'a>(group: &'a NavigationGroup, label: &str) -> &'a NavigationGroup {
        group
            .items
            .iter()
            .find_map(|item| match item {
                NavigationItem::Group(g) if g.label == label => Some(g),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_config_normalization() {
        let config = SchemaConfig::new("/api/petstore/", "petstore.yaml").unwrap();
        assert_eq!(config.base, "api/petstore");
        assert!(config.collapsed);
        assert!(!config.sidebar_method_badges);

        assert!(SchemaConfig::new("///", "petstore.yaml").is_err());
        assert!(SchemaConfig::new("api", "").is_err());
    }

    #[test]
    fn test_config_deserialization_defaults() {
        let config: SchemaConfig =
            serde_json::from_str(r#"{"base": "api", "schema": "s.yaml", "sidebarMethodBadges": true}"#)
                .unwrap();
        assert!(config.collapsed);
        assert!(config.sidebar_method_badges);
        assert_eq!(config.label, None);
    }

    #[test]
    fn test_build_navigation() {
        let doc = load_document(PETSTORE).unwrap();
        let config = SchemaConfig::new("api/petstore", "petstore.yaml").unwrap();
        let nav = build_navigation(&config, &doc);

        assert_eq!(nav.label, "Petstore");
        assert!(nav.collapsed);
        assert_eq!(labels(&nav), vec!["Overview", "pets", "store", "Webhooks"]);

        let pets = group(&nav, "pets");
        assert_eq!(labels(pets), vec!["Overview", "listPets"]);
        assert_eq!(
            pets.items[0],
            NavigationItem::Link(NavigationLink::new(
                "Overview",
                "/api/petstore/operations/tags/pets/".into()
            ))
        );
        assert_eq!(
            pets.items[1],
            NavigationItem::Link(NavigationLink::new(
                "listPets",
                "/api/petstore/operations/listpets/".into()
            ))
        );

        // `store` carries no metadata.
        assert_eq!(labels(group(&nav, "store")), vec!["getInventory"]);

        let webhooks = group(&nav, "Webhooks");
        assert_eq!(
            webhooks.items[0],
            NavigationItem::Link(NavigationLink::new(
                "newPet",
                "/api/petstore/webhooks/newpet/".into()
            ))
        );
    }

    #[test]
    fn test_label_and_badges() {
        let doc = load_document("openapi: 3.0.0\npaths:\n  /pets:\n    delete: {}\n").unwrap();
        let mut config = SchemaConfig::new("api", "s.yaml").unwrap();
        assert_eq!(build_navigation(&config, &doc).label, FALLBACK_LABEL);

        config.label = Some("Pets API".into());
        config.collapsed = false;
        config.sidebar_method_badges = true;
        let nav = build_navigation(&config, &doc);
        assert_eq!(nav.label, "Pets API");
        assert_eq!(labels(&nav), vec!["Overview", "Operations"]);

        let operations = group(&nav, "Operations");
        assert!(!operations.collapsed);
        match &operations.items[0] {
            NavigationItem::Link(link) => assert_eq!(link.badge.as_deref(), Some("DELETE")),
            other => panic!("unexpected item: {:?}", other),
        }
    }

    #[test]
    fn test_serialized_shape() {
        let doc = load_document(PETSTORE).unwrap();
        let config = SchemaConfig::new("api", "s.yaml").unwrap();
        let json = serde_json::to_value(build_navigation(&config, &doc)).unwrap();
        assert_eq!(json["items"][0]["type"], "link");
        assert_eq!(json["items"][1]["type"], "group");
        assert!(json["items"][0].get("badge").is_none());
        assert!(json.get("tag").is_none());
        assert!(json.get("minimal").is_none());
    }

    #[test]
    fn test_tag_groups_carry_metadata() {
        let doc = load_document(PETSTORE).unwrap();
        let config = SchemaConfig::new("api", "s.yaml").unwrap();
        let nav = build_navigation(&config, &doc);

        let pets = group(&nav, "pets");
        assert_eq!(pets.minimal, Some(false));
        assert_eq!(
            pets.tag.as_ref().and_then(|t| t.description.as_deref()),
            Some("Everything about pets")
        );

        let store = group(&nav, "store");
        assert_eq!(store.minimal, Some(true));
        assert_eq!(store.tag, Some(OperationTag::new("store")));

        let webhooks = group(&nav, "Webhooks");
        assert_eq!((webhooks.tag.as_ref(), webhooks.minimal), (None, None));

        let json = serde_json::to_value(&nav).unwrap();
        assert_eq!(json["items"][1]["tag"]["name"], "pets");
        assert_eq!(json["items"][1]["minimal"], false);
        assert_eq!(json["items"][2]["minimal"], true);
        assert!(json["items"][3].get("tag").is_none());
    }
}
