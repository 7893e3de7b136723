//! Explorer configuration.
//!
//! Handles loading, validating, and merging `explorer.toml`. Stock defaults
//! are serialized to a TOML table and the user's file is merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [layout]
//! ui = "components/ui"      # registry:ui
//! components = "components" # registry:block, registry:component, registry:example
//! lib = "lib"               # registry:lib
//! hooks = "hooks"           # registry:hook
//! pages = "app"             # registry:page
//!
//! [cache]
//! ttl_secs = 3600           # How long a fetched manifest stays fresh
//!
//! [tree]
//! mode = "auto"             # auto | metadata | full
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::tree::TreeMode;
use crate::types::RegistryItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// File name looked up when `--config` is not given.
pub const CONFIG_FILENAME: &str = "explorer.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Explorer configuration loaded from `explorer.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Folder roots used when a file has no explicit target.
    pub layout: InstallLayout,
    /// Manifest cache settings.
    pub cache: CacheConfig,
    /// Tree building settings.
    pub tree: TreeConfig,
}

impl ExplorerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, root) in self.layout.roots() {
            if root.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "layout.{key} must be relative to the project root"
                )));
            }
            if root.split('/').any(|segment| segment == "..") {
                return Err(ConfigError::Validation(format!(
                    "layout.{key} must not leave the project root"
                )));
            }
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.ttl_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Install folder for each type that has a path convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallLayout {
    pub ui: String,
    pub components: String,
    pub lib: String,
    pub hooks: String,
    pub pages: String,
}

impl InstallLayout {
    fn roots(&self) -> [(&'static str, &str); 5] {
        [
            ("ui", self.ui.as_str()),
            ("components", self.components.as_str()),
            ("lib", self.lib.as_str()),
            ("hooks", self.hooks.as_str()),
            ("pages", self.pages.as_str()),
        ]
    }
}

impl Default for InstallLayout {
    fn default() -> Self {
        Self {
            ui: "components/ui".to_string(),
            components: "components".to_string(),
            lib: "lib".to_string(),
            hooks: "hooks".to_string(),
            pages: "app".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Seconds a fetched manifest is served before it is fetched again.
    pub ttl_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 3600 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    pub mode: ModeSetting,
}

/// How the tree builder picks between metadata-only and full-content trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    /// Detect from the first file of the first item.
    #[default]
    Auto,
    Metadata,
    Full,
}

impl ModeSetting {
    /// The tree mode to build for `items`.
    pub fn resolve(self, items: &[RegistryItem]) -> TreeMode {
        match self {
            ModeSetting::Auto => TreeMode::detect(items),
            ModeSetting::Metadata => TreeMode::Metadata,
            ModeSetting::Full => TreeMode::Full,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(ExplorerConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value. `Ok(None)` if it does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<ExplorerConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ExplorerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a file, falling back to defaults when it is missing.
pub fn load_config(path: &Path) -> Result<ExplorerConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    if overlay.is_some() {
        tracing::debug!(path = %path.display(), "loaded config file");
    }
    resolve_config(overlay)
}

/// Returns a fully-commented stock `explorer.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Registry Explorer Configuration
# ===============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Install layout
# ---------------------------------------------------------------------------
# Folders used for files whose manifest entry has no explicit `target`.
# Paths are relative to the consuming project's root.
[layout]
ui = "components/ui"      # registry:ui
components = "components" # registry:block, registry:component, registry:example
lib = "lib"               # registry:lib
hooks = "hooks"           # registry:hook
pages = "app"             # registry:page

# ---------------------------------------------------------------------------
# Manifest cache
# ---------------------------------------------------------------------------
[cache]
# Seconds a fetched manifest is served before it is fetched again.
ttl_secs = 3600

# ---------------------------------------------------------------------------
# File tree
# ---------------------------------------------------------------------------
[tree]
# auto     - full tree when the manifest carries file contents
# metadata - one entry per item, anchored at its first file
# full     - one entry per file
mode = "auto"
"##
}
