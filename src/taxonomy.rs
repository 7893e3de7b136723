//! Item types and their public category slugs.
//!
//! Registries tag every item with a type such as `registry:ui` or
//! `registry:block`. This module is the single place where those tags are
//! recognized and paired with the URL-safe category slugs used in routes:
//!
//! ```text
//! registry:ui         ↔  ui
//! registry:block      ↔  blocks
//! registry:hook       ↔  hooks
//! registry:internal   →  (none)
//! ```
//!
//! ## Hand-maintained on purpose
//!
//! Both directions are explicit `match` tables. Slugs are never derived from a
//! tag by stripping prefixes or pluralizing: tags come from manifests we do not
//! control, and a derived mapping would turn any tag a publisher invents into a
//! route segment. An unrecognized tag is kept as [`ItemType::Unknown`] and has
//! no slug, which callers read as "not publicly navigable".

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a registry item or file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Ui,
    Block,
    Component,
    Hook,
    Lib,
    Page,
    Theme,
    Style,
    Example,
    Base,
    Font,
    Config,
    File,
    Item,
    /// Used by registries for plumbing; never exposed.
    Internal,
    /// Any tag not listed above, kept verbatim.
    Unknown(String),
}

/// Every type that has a public category, in display order.
pub const PUBLIC_TYPES: &[ItemType] = &[
    ItemType::Ui,
    ItemType::Block,
    ItemType::Component,
    ItemType::Hook,
    ItemType::Lib,
    ItemType::Page,
    ItemType::Theme,
    ItemType::Style,
    ItemType::Example,
    ItemType::Base,
    ItemType::Font,
    ItemType::Config,
    ItemType::File,
    ItemType::Item,
];

impl ItemType {
    /// Parse a manifest tag. Never fails; unrecognized tags become `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "registry:ui" => Self::Ui,
            "registry:block" => Self::Block,
            "registry:component" => Self::Component,
            "registry:hook" => Self::Hook,
            "registry:lib" => Self::Lib,
            "registry:page" => Self::Page,
            "registry:theme" => Self::Theme,
            "registry:style" => Self::Style,
            "registry:example" => Self::Example,
            "registry:base" => Self::Base,
            "registry:font" => Self::Font,
            "registry:config" => Self::Config,
            "registry:file" => Self::File,
            "registry:item" => Self::Item,
            "registry:internal" => Self::Internal,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The manifest tag for this type.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Ui => "registry:ui",
            Self::Block => "registry:block",
            Self::Component => "registry:component",
            Self::Hook => "registry:hook",
            Self::Lib => "registry:lib",
            Self::Page => "registry:page",
            Self::Theme => "registry:theme",
            Self::Style => "registry:style",
            Self::Example => "registry:example",
            Self::Base => "registry:base",
            Self::Font => "registry:font",
            Self::Config => "registry:config",
            Self::File => "registry:file",
            Self::Item => "registry:item",
            Self::Internal => "registry:internal",
            Self::Unknown(tag) => tag,
        }
    }

    /// Human-readable category label, e.g. "UI Components".
    pub fn label(&self) -> &str {
        match self {
            Self::Ui => "UI Components",
            Self::Block => "Blocks",
            Self::Component => "Components",
            Self::Hook => "Hooks",
            Self::Lib => "Libraries",
            Self::Page => "Pages",
            Self::Theme => "Themes",
            Self::Style => "Styles",
            Self::Example => "Examples",
            Self::Base => "Bases",
            Self::Font => "Fonts",
            Self::Config => "Config Files",
            Self::File => "Files",
            Self::Item => "Items",
            Self::Internal => "Internal",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block)
    }
}

impl Default for ItemType {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for ItemType {
    fn from(tag: String) -> Self {
        match Self::from_tag(&tag) {
            Self::Unknown(_) => Self::Unknown(tag),
            known => known,
        }
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Unknown(tag) => tag,
            known => known.as_tag().to_string(),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Category slug for a type, or `None` if the type is not public.
pub fn type_to_slug(item_type: &ItemType) -> Option<&'static str> {
    match item_type {
        ItemType::Ui => Some("ui"),
        ItemType::Block => Some("blocks"),
        ItemType::Component => Some("components"),
        ItemType::Hook => Some("hooks"),
        ItemType::Lib => Some("lib"),
        ItemType::Page => Some("pages"),
        ItemType::Theme => Some("themes"),
        ItemType::Style => Some("styles"),
        ItemType::Example => Some("examples"),
        ItemType::Base => Some("bases"),
        ItemType::Font => Some("fonts"),
        ItemType::Config => Some("config"),
        ItemType::File => Some("files"),
        ItemType::Item => Some("items"),
        ItemType::Internal | ItemType::Unknown(_) => None,
    }
}

/// Type for a category slug, or `None` if no public type uses it.
pub fn slug_to_type(slug: &str) -> Option<ItemType> {
    match slug {
        "ui" => Some(ItemType::Ui),
        "blocks" => Some(ItemType::Block),
        "components" => Some(ItemType::Component),
        "hooks" => Some(ItemType::Hook),
        "lib" => Some(ItemType::Lib),
        "pages" => Some(ItemType::Page),
        "themes" => Some(ItemType::Theme),
        "styles" => Some(ItemType::Style),
        "examples" => Some(ItemType::Example),
        "bases" => Some(ItemType::Base),
        "fonts" => Some(ItemType::Font),
        "config" => Some(ItemType::Config),
        "files" => Some(ItemType::File),
        "items" => Some(ItemType::Item),
        _ => None,
    }
}
