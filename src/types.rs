//! Manifest data types shared by every projection stage.
//!
//! These mirror the JSON shape published by component registries. Unknown
//! fields are ignored on input so that registries extending the format keep
//! loading.

use crate::taxonomy::ItemType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One installable unit of a registry (component, hook, block, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    /// Display name and route segment. Case-sensitive.
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<RegistryFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dev_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_vars: Option<CssVars>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl RegistryItem {
    /// An item with no files or metadata beyond its name and type.
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            title: None,
            description: None,
            author: None,
            files: Vec::new(),
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
            registry_dependencies: Vec::new(),
            css_vars: None,
            categories: Vec::new(),
            docs: None,
            meta: None,
        }
    }

    /// Whether this item's first file carries source text.
    pub fn has_content(&self) -> bool {
        self.files.first().is_some_and(|f| f.content.is_some())
    }

    /// Files whose `type` was omitted take the item's own type.
    pub(crate) fn inherit_file_types(&mut self) {
        for file in &mut self.files {
            if file.file_type.is_none() {
                file.file_type = Some(self.item_type.clone());
            }
        }
    }
}

/// One source file belonging to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Location in the origin repository. Opaque; empty when omitted.
    #[serde(default)]
    pub path: String,
    /// Explicit install path. When absent it is inferred from the type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<ItemType>,
    /// Raw source text; present only in full-content manifests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl RegistryFile {
    pub fn new(path: impl Into<String>, file_type: ItemType) -> Self {
        Self {
            path: path.into(),
            target: None,
            file_type: Some(file_type),
            content: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Theme variables attached to an item.
///
/// `theme` and `light` both land in `:root`; `dark` lands in `.dark`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssVars {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub theme: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub light: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dark: BTreeMap<String, String>,
}

impl CssVars {
    pub fn is_empty(&self) -> bool {
        self.theme.is_empty() && self.light.is_empty() && self.dark.is_empty()
    }

    /// Render the variables as a stylesheet.
    ///
    /// ```text
    /// :root {
    ///   --radius: 0.5rem;
    ///   --background: 0 0% 100%;
    /// }
    ///
    /// .dark {
    ///   --background: 240 10% 3.9%;
    /// }
    /// ```
    pub fn to_css(&self) -> String {
        let mut blocks = Vec::new();

        let root: Vec<String> = self
            .theme
            .iter()
            .chain(self.light.iter())
            .map(|(key, value)| declaration(key, value))
            .collect();
        if !root.is_empty() {
            blocks.push(format!(":root {{\n{}\n}}", root.join("\n")));
        }

        let dark: Vec<String> = self
            .dark
            .iter()
            .map(|(key, value)| declaration(key, value))
            .collect();
        if !dark.is_empty() {
            blocks.push(format!(".dark {{\n{}\n}}", dark.join("\n")));
        }

        let mut css = blocks.join("\n\n");
        if !css.is_empty() {
            css.push('\n');
        }
        css
    }
}

fn declaration(key: &str, value: &str) -> String {
    let key = key.trim_start_matches('-');
    format!("  --{key}: {value};")
}
