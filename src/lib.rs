//! # Registry Explorer
//!
//! Turns a component registry manifest into the two views a registry browser
//! needs: a category taxonomy ("blocks", "ui", "hooks", ...) and a file tree
//! showing where each item's files land in a consuming project.
//!
//! # Architecture: Pure Projections
//!
//! Every view is a pure function of the manifest's items:
//!
//! ```text
//! manifest.json ──► Registry ──┬──► group_by_category ──► CategoryMap
//!                              ├──► build_tree        ──► Forest
//!                              └──► routes            ──► Vec<Route>
//! ```
//!
//! Nothing is mutated, nothing is fetched inside a projection, and calling one
//! twice with the same input yields equal output. Loading and caching of
//! manifests sits at the edge in [`source`] and [`cache`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`taxonomy`] | Item type tags, public category slugs, and the mapping between them |
//! | [`target`] | Install path of a file: explicit target or per-type folder convention |
//! | [`grouping`] | Partition of items into public categories |
//! | [`tree`] | Metadata and full-content file-tree projections |
//! | [`renderable`] | Binary-asset detection by extension |
//! | [`routes`] | Detail routes and per-item detail views |
//! | [`manifest`] | Manifest parsing and the generated theme stylesheet |
//! | [`source`] | Manifest sources, plain and cached |
//! | [`cache`] | TTL cache of parsed manifests |
//! | [`config`] | `explorer.toml` loading, validation, and merging |
//! | [`types`] | Manifest data types (`RegistryItem`, `RegistryFile`, `CssVars`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Unknown Is Not An Error
//!
//! Registries evolve faster than their browsers. An unrecognized type tag
//! parses into [`taxonomy::ItemType::Unknown`] and simply has no category and
//! no path convention; a path that cannot be placed in the tree skips that one
//! file. Only a manifest without an `items` array is rejected.
//!
//! ## Deterministic Ordering
//!
//! Categories are keyed in a `BTreeMap` and tree children are stored by
//! segment name, so output never depends on hash order. Folders list before
//! files at every level.

pub mod cache;
pub mod config;
pub mod grouping;
pub mod manifest;
pub mod output;
pub mod renderable;
pub mod routes;
pub mod source;
pub mod target;
pub mod taxonomy;
pub mod tree;
pub mod types;

pub use grouping::{CategoryMap, group_by_category};
pub use manifest::{ManifestError, Registry};
pub use renderable::is_renderable;
pub use routes::{ItemDetail, Route, routes};
pub use target::resolve_target_path;
pub use taxonomy::{ItemType, slug_to_type, type_to_slug};
pub use tree::{Forest, NodeKind, TreeMode, TreeNode, build_tree};
pub use types::{RegistryFile, RegistryItem};

#[cfg(test)]
pub(crate) mod test_helpers;
