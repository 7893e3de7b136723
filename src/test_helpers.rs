//! Shared test utilities for the registry-explorer test suite.
//!
//! Provides item builders, tree lookups that panic with a clear message on
//! miss, and a one-line-per-node tree shape assertion.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let forest = build_tree(&[
//!     item("button", ItemType::Ui, &["button.tsx"]),
//!     login_form_block(),
//! ]);
//!
//! assert_tree_shape(&forest, &[
//!     "folder components",
//!     "folder components/blocks",
//!     "block components/blocks/login-form",
//!     "folder components/ui",
//! ]);
//! assert_eq!(item_names(find_node(&forest, "components/ui")), vec!["button"]);
//! ```

use crate::taxonomy::ItemType;
use crate::tree::{Forest, NodeKind, TreeNode};
use crate::types::{RegistryFile, RegistryItem};

// =========================================================================
// Item builders
// =========================================================================

/// An item whose files carry the item's own type and no target or content.
pub fn item(name: &str, item_type: ItemType, paths: &[&str]) -> RegistryItem {
    let mut item = RegistryItem::new(name, item_type.clone());
    item.files = paths
        .iter()
        .map(|p| RegistryFile::new(*p, item_type.clone()))
        .collect();
    item
}

pub trait ItemExt {
    /// Set an explicit target on the file at `idx`. Panics if out of range.
    fn with_target_for(self, idx: usize, target: &str) -> Self;
}

impl ItemExt for RegistryItem {
    fn with_target_for(mut self, idx: usize, target: &str) -> Self {
        let count = self.files.len();
        let file = self
            .files
            .get_mut(idx)
            .unwrap_or_else(|| panic!("item '{}' has {count} files, no index {idx}", self.name));
        file.target = Some(target.to_string());
        self
    }
}

/// Give every file of every item some content, turning a metadata-only
/// fixture into a full-content one.
pub fn with_content(items: Vec<RegistryItem>) -> Vec<RegistryItem> {
    items
        .into_iter()
        .map(|mut item| {
            for file in &mut item.files {
                file.content = Some(format!("// {}\n", file.path));
            }
            item
        })
        .collect()
}

/// A two-file block installed under `components/blocks/`.
pub fn login_form_block() -> RegistryItem {
    item("login-form", ItemType::Block, &["login-form.tsx", "login-form.css"])
        .with_target_for(0, "components/blocks/login-form.tsx")
        .with_target_for(1, "components/blocks/login-form.css")
}

// =========================================================================
// Tree lookups
// =========================================================================

/// Find a node by full path. Panics if not found.
pub fn find_node<'a>(forest: &'a Forest, path: &str) -> &'a TreeNode {
    forest.find(path).unwrap_or_else(|| {
        let paths: Vec<&str> = forest.walk().iter().map(|(_, n)| n.path.as_str()).collect();
        panic!("node '{path}' not found. Available: {paths:?}")
    })
}

/// Names of the items attached to a node, in stored order.
pub fn item_names(node: &TreeNode) -> Vec<&str> {
    node.items.iter().map(|i| i.name.as_str()).collect()
}

// =========================================================================
// Shape assertions
// =========================================================================

fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Folder => "folder",
        NodeKind::File => "file",
        NodeKind::Block => "block",
    }
}

/// Assert the whole forest, in display order, as `"<kind> <path>"` lines.
///
/// ```rust
/// assert_tree_shape(&forest, &[
///     "folder lib",
///     "file lib/utils.ts",
/// ]);
/// ```
pub fn assert_tree_shape(forest: &Forest, expected: &[&str]) {
    let actual: Vec<String> = forest
        .walk()
        .iter()
        .map(|(_, node)| format!("{} {}", kind_label(node.kind), node.path))
        .collect();
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    pretty_assertions::assert_eq!(actual, expected, "tree shape mismatch");
}
