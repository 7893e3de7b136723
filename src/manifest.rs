//! Registry manifest loading.
//!
//! A manifest is a JSON document shaped as `{ "items": [ ... ] }`, usually
//! with a few descriptive fields around it:
//!
//! ```json
//! {
//!   "$schema": "https://ui.shadcn.com/schema/registry.json",
//!   "name": "acme",
//!   "homepage": "https://acme.dev",
//!   "items": [
//!     { "name": "button", "type": "registry:ui",
//!       "files": [{ "path": "registry/ui/button.tsx", "type": "registry:ui" }] }
//!   ]
//! }
//! ```
//!
//! ## Validation
//!
//! Only the top-level shape is enforced: the document must be an object with
//! an `items` array, otherwise loading fails with [`ManifestError::Invalid`].
//! Everything below that degrades gracefully:
//!
//! - unknown fields anywhere are ignored;
//! - an item that cannot be decoded (no `name`, wrong field types) is skipped
//!   with a warning;
//! - a file without `path` keeps an empty one and is placed by its `target`,
//!   or skipped by the tree builder when it has none;
//! - a file without its own `type` takes the item's type.

use crate::taxonomy::ItemType;
use crate::tree::TreeMode;
use crate::types::{RegistryFile, RegistryItem};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid manifest: {0}")]
    Invalid(String),
}

/// File name given to the stylesheet generated from an item's `cssVars`.
pub const CSS_VARS_FILENAME: &str = "theme.css";

/// A loaded registry manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Registry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub items: Vec<RegistryItem>,
}

impl Registry {
    pub fn new(items: Vec<RegistryItem>) -> Self {
        Self {
            name: None,
            homepage: None,
            items,
        }
    }

    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build a registry from an already-parsed JSON document.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ManifestError> {
        let serde_json::Value::Object(mut doc) = value else {
            return Err(ManifestError::Invalid("expected a JSON object".into()));
        };
        let Some(serde_json::Value::Array(raw_items)) = doc.remove("items") else {
            return Err(ManifestError::Invalid("missing `items` array".into()));
        };

        let mut items = Vec::with_capacity(raw_items.len());
        for (index, raw) in raw_items.into_iter().enumerate() {
            match serde_json::from_value::<RegistryItem>(raw) {
                Ok(mut item) => {
                    item.inherit_file_types();
                    items.push(item);
                }
                Err(e) => tracing::warn!(index, error = %e, "skipping undecodable item"),
            }
        }

        Ok(Self {
            name: string_field(&doc, "name"),
            homepage: string_field(&doc, "homepage"),
            items,
        })
    }

    /// Whether the manifest carries file contents.
    pub fn mode(&self) -> TreeMode {
        TreeMode::detect(&self.items)
    }

    /// Copy of this registry in which every item with theme variables gets a
    /// generated `theme.css` file appended.
    ///
    /// The stylesheet carries content only for full-content manifests, so the
    /// mode of the registry never changes.
    pub fn with_css_vars_files(&self) -> Self {
        let with_content = self.mode() == TreeMode::Full;
        let items = self
            .items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if let Some(file) = css_vars_file(&item, with_content) {
                    item.files.push(file);
                }
                item
            })
            .collect();
        Self {
            items,
            ..self.clone()
        }
    }
}

fn string_field(doc: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<String> {
    doc.get(key).and_then(|v| v.as_str()).map(String::from)
}

/// The stylesheet file for an item's `cssVars`, if it has any.
fn css_vars_file(item: &RegistryItem, with_content: bool) -> Option<RegistryFile> {
    let vars = item.css_vars.as_ref().filter(|v| !v.is_empty())?;
    let mut file = RegistryFile::new(CSS_VARS_FILENAME, ItemType::File);
    if with_content {
        file.content = Some(vars.to_css());
    }
    Some(file)
}
