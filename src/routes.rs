//! Public routes and per-item detail.
//!
//! A registry is browsed as `/<category>/<item>`. Only items with a public
//! category and something renderable get a detail route; the category slug
//! and item name are the only identifiers that leave this crate, and both pass
//! through unchanged.

use crate::config::InstallLayout;
use crate::grouping::{CategoryMap, group_by_category};
use crate::manifest::Registry;
use crate::renderable::{is_binary_file, is_renderable};
use crate::target::resolve_target_path_with;
use crate::types::RegistryItem;
use serde::Serialize;
use std::collections::HashSet;

/// One detail route: category slug plus item name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    pub category: &'static str,
    pub item: String,
}

impl Route {
    /// `category/item`, unencoded.
    pub fn path(&self) -> String {
        format!("{}/{}", self.category, self.item)
    }
}

/// Detail routes for a registry, in category order then manifest order.
///
/// Repeated names within a category yield one route.
pub fn routes(registry: &Registry) -> Vec<Route> {
    routes_for(&group_by_category(&registry.items))
}

/// Detail routes for an already grouped registry.
pub fn routes_for(categories: &CategoryMap) -> Vec<Route> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (slug, items) in categories {
        for item in items {
            if !is_renderable(&item.files) {
                continue;
            }
            let route = Route {
                category: slug,
                item: item.name.clone(),
            };
            if seen.insert(route.clone()) {
                out.push(route);
            }
        }
    }
    out
}

/// One file of an item as shown on its detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDetail {
    pub path: String,
    pub target: String,
    pub binary: bool,
    pub has_content: bool,
}

/// Everything the detail page of an item shows besides the file tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetail {
    pub name: String,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub renderable: bool,
    pub files: Vec<FileDetail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,
}

impl ItemDetail {
    pub fn new(item: &RegistryItem, category: &'static str, layout: &InstallLayout) -> Self {
        let files = item
            .files
            .iter()
            .map(|file| FileDetail {
                path: file.path.clone(),
                target: resolve_target_path_with(file, layout),
                binary: is_binary_file(file),
                has_content: file.content.is_some(),
            })
            .collect();
        Self {
            name: item.name.clone(),
            category,
            title: item.title.clone(),
            description: item.description.clone(),
            renderable: is_renderable(&item.files),
            files,
            dependencies: item.dependencies.clone(),
            registry_dependencies: item.registry_dependencies.clone(),
        }
    }
}
