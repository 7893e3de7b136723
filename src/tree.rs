//! File-tree projection for the explorer pane.
//!
//! Takes a list of items (usually one category, or a single item) and lays
//! them out by install path:
//!
//! ```text
//! components/
//! ├── blocks/
//! │   └── login-form        [block: login-form.tsx, login-form.css]
//! └── ui/
//!     ├── button.tsx
//!     └── card.tsx
//! lib/
//! └── utils.ts
//! ```
//!
//! ## Two modes
//!
//! Registries publish either a metadata-only index (no file contents) or full
//! item documents. The mode is picked from the first file of the first item:
//!
//! - **Metadata**: one entry per item, anchored at the folder of its *first*
//!   file. Items are collected in that folder's `items` list. Blocks take over
//!   their folder (see below).
//! - **Full**: one `file` node per file of every item, each bound to exactly
//!   that file and its owning item.
//!
//! ## Blocks
//!
//! In metadata mode a block item owns a folder outright:
//!
//! - if the block's name equals the folder holding its first file, that folder
//!   becomes a `block` node (previous children and items are dropped);
//! - a multi-file block whose name differs gets its own `block` node named
//!   after it inside that folder.
//!
//! Nothing may be attached underneath a `block` node afterwards; its files are
//! listed flat from the owning item.
//!
//! ## Degradation
//!
//! Paths that are empty or have no usable segment are skipped for that one
//! file. Paths that would descend through an existing file or block node are
//! skipped the same way. Neither aborts the build.
//!
//! ## Ordering
//!
//! Children are stored in a map keyed by path segment. Reading them back via
//! [`TreeNode::children_ordered`] yields folders first, then leaves, each
//! alphabetical. Anchored items are sorted by name.

use crate::config::InstallLayout;
use crate::target::{base_name, path_segments, resolve_target_path_with};
use crate::types::{RegistryFile, RegistryItem};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
    Block,
}

/// Which projection [`build_tree`] performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeMode {
    #[default]
    Metadata,
    Full,
}

impl TreeMode {
    /// Full when the first file of the first item carries content.
    pub fn detect(items: &[RegistryItem]) -> Self {
        match items.first() {
            Some(item) if item.has_content() => Self::Full,
            _ => Self::Metadata,
        }
    }
}

/// One node of the projected tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    /// Path segment this node represents.
    pub name: String,
    /// Segments from the root to this node joined by `/`.
    pub path: String,
    pub kind: NodeKind,
    #[serde(
        serialize_with = "serialize_ordered",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub children: BTreeMap<String, TreeNode>,
    /// Items anchored here.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RegistryItem>,
    /// The bound file of a `file` node (and of a top-level block).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<RegistryFile>,
}

impl TreeNode {
    fn folder(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: NodeKind::Folder,
            children: BTreeMap::new(),
            items: Vec::new(),
            file: None,
        }
    }

    fn leaf(name: &str, path: String, kind: NodeKind, file: RegistryFile, item: RegistryItem) -> Self {
        Self {
            name: name.to_string(),
            path,
            kind,
            children: BTreeMap::new(),
            items: vec![item],
            file: Some(file),
        }
    }

    fn block(name: &str, path: String, item: RegistryItem) -> Self {
        Self {
            name: name.to_string(),
            path,
            kind: NodeKind::Block,
            children: BTreeMap::new(),
            items: vec![item],
            file: None,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Children in display order: folders, then leaves, each by name.
    pub fn children_ordered(&self) -> Vec<&TreeNode> {
        ordered(&self.children)
    }

    /// The item that owns this node, for `file` and `block` nodes.
    pub fn owner(&self) -> Option<&RegistryItem> {
        match self.kind {
            NodeKind::Folder => None,
            NodeKind::File | NodeKind::Block => self.items.first(),
        }
    }

    /// Files shown for this node: the bound file of a `file` node, or the
    /// owning item's files as a flat list for a `block`.
    pub fn files(&self) -> &[RegistryFile] {
        match (self.kind, &self.file) {
            (NodeKind::File, Some(file)) => std::slice::from_ref(file),
            (NodeKind::Block, _) => self.owner().map(|i| i.files.as_slice()).unwrap_or(&[]),
            _ => &[],
        }
    }

    fn sort_items(&mut self) {
        self.items.sort_by(|a, b| a.name.cmp(&b.name));
        for child in self.children.values_mut() {
            child.sort_items();
        }
    }
}

fn ordered(nodes: &BTreeMap<String, TreeNode>) -> Vec<&TreeNode> {
    let mut out: Vec<&TreeNode> = nodes.values().collect();
    // Stable: the map already yields names alphabetically.
    out.sort_by_key(|node| !node.is_folder());
    out
}

fn serialize_ordered<S: Serializer>(
    nodes: &BTreeMap<String, TreeNode>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(ordered(nodes))
}

/// The projected tree: zero or more root nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Forest {
    pub mode: TreeMode,
    #[serde(serialize_with = "serialize_ordered")]
    roots: BTreeMap<String, TreeNode>,
}

impl Forest {
    /// Root nodes in display order.
    pub fn roots(&self) -> Vec<&TreeNode> {
        ordered(&self.roots)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Look up a node by its full path.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let segments = path_segments(path);
        let (first, rest) = segments.split_first()?;
        let mut node = self.roots.get(*first)?;
        for segment in rest {
            node = node.children.get(*segment)?;
        }
        Some(node)
    }

    /// Depth-first walk in display order, with each node's depth.
    pub fn walk(&self) -> Vec<(usize, &TreeNode)> {
        let mut out = Vec::new();
        for root in self.roots() {
            walk_into(root, 0, &mut out);
        }
        out
    }

    /// First `file` or `block` node in display order, the explorer's default
    /// selection.
    pub fn first_leaf(&self) -> Option<&TreeNode> {
        self.walk()
            .into_iter()
            .map(|(_, node)| node)
            .find(|node| !node.is_folder())
    }
}

fn walk_into<'a>(node: &'a TreeNode, depth: usize, out: &mut Vec<(usize, &'a TreeNode)>) {
    out.push((depth, node));
    for child in node.children_ordered() {
        walk_into(child, depth + 1, out);
    }
}

// ============================================================================
// Building
// ============================================================================

/// Build the tree for `items`, detecting the mode, with the default layout.
pub fn build_tree(items: &[RegistryItem]) -> Forest {
    build_tree_in(items, TreeMode::detect(items), &InstallLayout::default())
}

/// Build the tree in a fixed mode with the default layout.
pub fn build_tree_with_mode(items: &[RegistryItem], mode: TreeMode) -> Forest {
    build_tree_in(items, mode, &InstallLayout::default())
}

/// Build the tree in a fixed mode, resolving targets against `layout`.
pub fn build_tree_in(items: &[RegistryItem], mode: TreeMode, layout: &InstallLayout) -> Forest {
    let mut roots = BTreeMap::new();
    for item in items {
        match mode {
            TreeMode::Metadata => insert_item(&mut roots, item, layout),
            TreeMode::Full => {
                for file in &item.files {
                    insert_file(&mut roots, item, file, layout);
                }
            }
        }
    }
    for node in roots.values_mut() {
        node.sort_items();
    }
    tracing::debug!(?mode, items = items.len(), roots = roots.len(), "built tree");
    Forest { mode, roots }
}

fn join_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}/{segment}")
    }
}

/// Segments of a resolved target, or none when it names no file.
///
/// A target ending in `/` (or in `.`/`..`) has no file name; placing it would
/// turn its last folder into a leaf and shadow every sibling below it.
fn placeable_segments(target: &str) -> Vec<&str> {
    match base_name(target).trim() {
        "" | "." | ".." => Vec::new(),
        _ => path_segments(target),
    }
}

/// Walk (creating as needed) the folder chain `folders`, returning the
/// children map of the last folder and that folder's path.
///
/// `None` when the chain runs into a `file` or `block` node.
fn folder_level<'m>(
    mut level: &'m mut BTreeMap<String, TreeNode>,
    folders: &[&str],
) -> Option<(&'m mut BTreeMap<String, TreeNode>, String)> {
    let mut path = String::new();
    for segment in folders {
        path = join_path(&path, segment);
        let node = level
            .entry((*segment).to_string())
            .or_insert_with(|| TreeNode::folder(segment, &path));
        if !node.is_folder() {
            return None;
        }
        level = &mut node.children;
    }
    Some((level, path))
}

/// Full mode: one `file` node per file. A later file at the same path
/// replaces the earlier one.
fn insert_file(
    roots: &mut BTreeMap<String, TreeNode>,
    item: &RegistryItem,
    file: &RegistryFile,
    layout: &InstallLayout,
) {
    let target = resolve_target_path_with(file, layout);
    let segments = placeable_segments(&target);
    let Some((leaf, folders)) = segments.split_last() else {
        tracing::debug!(item = %item.name, path = %file.path, "skipping file without a usable path");
        return;
    };
    let Some((level, parent)) = folder_level(roots, folders) else {
        tracing::debug!(item = %item.name, %target, "skipping file under a non-folder node");
        return;
    };
    if level.get(*leaf).is_some_and(TreeNode::is_folder) {
        tracing::debug!(item = %item.name, %target, "skipping file that collides with a folder");
        return;
    }
    let path = join_path(&parent, leaf);
    level.insert(
        (*leaf).to_string(),
        TreeNode::leaf(leaf, path, NodeKind::File, file.clone(), item.clone()),
    );
}

/// Metadata mode: anchor the item at the folder of its first file.
fn insert_item(roots: &mut BTreeMap<String, TreeNode>, item: &RegistryItem, layout: &InstallLayout) {
    let Some(first) = item.files.first() else {
        return;
    };
    let target = resolve_target_path_with(first, layout);
    let segments = placeable_segments(&target);

    match segments.as_slice() {
        [] => {
            tracing::debug!(item = %item.name, path = %first.path, "skipping item without a usable path");
        }
        [leaf] => {
            let kind = if item.item_type.is_block() {
                NodeKind::Block
            } else {
                NodeKind::File
            };
            if roots.get(*leaf).is_some_and(TreeNode::is_folder) {
                tracing::debug!(item = %item.name, %target, "skipping item that collides with a folder");
                return;
            }
            roots.insert(
                (*leaf).to_string(),
                TreeNode::leaf(leaf, (*leaf).to_string(), kind, first.clone(), item.clone()),
            );
        }
        [parents @ .., folder_name, _] => {
            let Some((level, parent)) = folder_level(roots, parents) else {
                tracing::debug!(item = %item.name, %target, "skipping item under a non-folder node");
                return;
            };
            let folder = level
                .entry((*folder_name).to_string())
                .or_insert_with(|| TreeNode::folder(folder_name, &join_path(&parent, folder_name)));
            attach(folder, item);
        }
    }
}

/// Attach a metadata-mode item to the folder holding its first file.
fn attach(folder: &mut TreeNode, item: &RegistryItem) {
    match folder.kind {
        NodeKind::Block => {
            if folder.owner().is_some_and(|owner| owner.name == item.name) {
                folder.items = vec![merge_item(&folder.items[0], item)];
            } else {
                tracing::debug!(item = %item.name, block = %folder.path, "block already owns this folder");
            }
        }
        NodeKind::File => {
            tracing::debug!(item = %item.name, path = %folder.path, "skipping item under a file node");
        }
        NodeKind::Folder if item.item_type.is_block() && item.name == folder.name => {
            folder.kind = NodeKind::Block;
            folder.children.clear();
            folder.items = vec![item.clone()];
        }
        NodeKind::Folder if item.item_type.is_block() && owns_subfolder(item) => {
            let path = join_path(&folder.path, &item.name);
            match folder.children.entry(item.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(TreeNode::block(&item.name, path, item.clone()));
                }
                Entry::Occupied(mut slot) => attach_block_child(slot.get_mut(), item),
            }
        }
        NodeKind::Folder => append_item(&mut folder.items, item),
    }
}

/// A multi-file block whose name can stand as a single path segment.
fn owns_subfolder(item: &RegistryItem) -> bool {
    item.files.len() > 1 && !item.name.trim().is_empty() && !item.name.contains('/')
}

fn attach_block_child(node: &mut TreeNode, item: &RegistryItem) {
    match node.kind {
        NodeKind::Folder => {
            node.kind = NodeKind::Block;
            node.children.clear();
            node.items = vec![item.clone()];
        }
        NodeKind::Block if node.owner().is_some_and(|owner| owner.name == item.name) => {
            node.items = vec![merge_item(&node.items[0], item)];
        }
        NodeKind::Block | NodeKind::File => {
            tracing::debug!(item = %item.name, path = %node.path, "skipping block that collides with another node");
        }
    }
}

/// Add an item to a folder's list; a same-named item is merged in place.
fn append_item(items: &mut Vec<RegistryItem>, item: &RegistryItem) {
    match items.iter_mut().find(|existing| existing.name == item.name) {
        Some(existing) => *existing = merge_item(existing, item),
        None => items.push(item.clone()),
    }
}

/// A later occurrence of an item updates the earlier one.
///
/// Fields come from the later occurrence; files are unioned by origin path
/// with the later version of a shared path replacing the earlier one.
fn merge_item(earlier: &RegistryItem, later: &RegistryItem) -> RegistryItem {
    let mut files = earlier.files.clone();
    for file in &later.files {
        match files.iter_mut().find(|f| f.path == file.path) {
            Some(existing) => *existing = file.clone(),
            None => files.push(file.clone()),
        }
    }
    RegistryItem {
        files,
        ..later.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ItemType;
    use crate::test_helpers::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Mode detection
    // =========================================================================

    #[test]
    fn mode_detected_from_first_file_of_first_item() {
        let meta = vec![item("button", ItemType::Ui, &["button.tsx"])];
        assert_eq!(TreeMode::detect(&meta), TreeMode::Metadata);

        let full = with_content(meta.clone());
        assert_eq!(TreeMode::detect(&full), TreeMode::Full);

        // Only the first item decides.
        let mut mixed = meta.clone();
        mixed.extend(full);
        assert_eq!(TreeMode::detect(&mixed), TreeMode::Metadata);

        assert_eq!(TreeMode::detect(&[]), TreeMode::Metadata);
    }

    // =========================================================================
    // Metadata mode
    // =========================================================================

    #[test]
    fn ui_item_lands_in_components_ui() {
        let forest = build_tree(&[item("button", ItemType::Ui, &["button.tsx"])]);
        assert_tree_shape(&forest, &["folder components", "folder components/ui"]);

        let ui = find_node(&forest, "components/ui");
        assert_eq!(item_names(ui), vec!["button"]);
    }

    #[test]
    fn single_segment_item_becomes_top_level_leaf() {
        let forest = build_tree(&[
            item("env", ItemType::File, &["templates/.env.example"]),
            item("starter", ItemType::Block, &["starter.tsx"])
                .with_target_for(0, "starter.tsx"),
        ]);
        assert_tree_shape(&forest, &["file .env.example", "block starter.tsx"]);
        assert_eq!(find_node(&forest, ".env.example").owner().unwrap().name, "env");
    }

    #[test]
    fn item_without_files_is_not_placed() {
        let forest = build_tree(&[item("deps-only", ItemType::Lib, &[])]);
        assert!(forest.is_empty());
    }

    #[test]
    fn only_first_file_anchors_in_metadata_mode() {
        let forest = build_tree(&[item("chart", ItemType::Ui, &["chart.tsx", "../lib/chart-utils.ts"])]);
        assert_tree_shape(&forest, &["folder components", "folder components/ui"]);
    }

    #[test]
    fn block_named_after_its_folder_is_promoted() {
        let forest = build_tree(&[
            item("calendar", ItemType::Ui, &["x.tsx"])
                .with_target_for(0, "components/dashboard/calendar.tsx"),
            item("dashboard", ItemType::Block, &["page.tsx", "chart.tsx"])
                .with_target_for(0, "components/dashboard/page.tsx")
                .with_target_for(1, "components/dashboard/chart.tsx"),
        ]);
        assert_tree_shape(&forest, &["folder components", "block components/dashboard"]);

        let block = find_node(&forest, "components/dashboard");
        assert_eq!(item_names(block), vec!["dashboard"]);
        assert_eq!(block.files().len(), 2);
    }

    #[test]
    fn multi_file_block_owns_a_folder_named_after_it() {
        let forest = build_tree(&[login_form_block()]);
        assert_tree_shape(&forest, &[
            "folder components",
            "folder components/blocks",
            "block components/blocks/login-form",
        ]);
        let block = find_node(&forest, "components/blocks/login-form");
        assert!(block.children.is_empty());
        let paths: Vec<&str> = block.files().iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["login-form.tsx", "login-form.css"]);
        assert!(find_node(&forest, "components/blocks").items.is_empty());
    }

    #[test]
    fn single_file_block_with_other_name_attaches_to_folder() {
        let forest = build_tree(&[item("hero", ItemType::Block, &["hero-section.tsx"])]);
        assert_tree_shape(&forest, &["folder components"]);
        assert_eq!(item_names(find_node(&forest, "components")), vec!["hero"]);
    }

    #[test]
    fn nothing_attaches_under_a_block() {
        let forest = build_tree(&[
            item("dashboard", ItemType::Block, &["a.tsx", "b.tsx"])
                .with_target_for(0, "components/dashboard/a.tsx"),
            item("widget", ItemType::Ui, &["w.tsx"])
                .with_target_for(0, "components/dashboard/widgets/w.tsx"),
            item("other", ItemType::Ui, &["o.tsx"])
                .with_target_for(0, "components/dashboard/o.tsx"),
        ]);
        assert_tree_shape(&forest, &["folder components", "block components/dashboard"]);
        assert_eq!(item_names(find_node(&forest, "components/dashboard")), vec!["dashboard"]);
    }

    #[test]
    fn repeated_block_updates_its_node() {
        let mut again = login_form_block();
        again.description = Some("updated".into());
        let forest = build_tree(&[login_form_block(), again]);

        let block = find_node(&forest, "components/blocks/login-form");
        assert_eq!(block.items.len(), 1);
        assert_eq!(block.items[0].description.as_deref(), Some("updated"));
    }

    #[test]
    fn same_named_items_merge_in_folder() {
        let forest = build_tree(&[
            item("shared", ItemType::Lib, &["shared-a.ts"]),
            item("shared", ItemType::Lib, &["shared-b.ts"]),
            item("shared", ItemType::Lib, &["shared-a.ts"]),
        ]);
        let lib = find_node(&forest, "lib");
        assert_eq!(item_names(lib), vec!["shared"]);
        let files: Vec<&str> = lib.items[0].files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(files, vec!["shared-a.ts", "shared-b.ts"]);
    }

    #[test]
    fn items_in_folder_sorted_by_name() {
        let forest = build_tree(&[
            item("tooltip", ItemType::Ui, &["tooltip.tsx"]),
            item("accordion", ItemType::Ui, &["accordion.tsx"]),
            item("card", ItemType::Ui, &["card.tsx"]),
        ]);
        assert_eq!(item_names(find_node(&forest, "components/ui")), vec![
            "accordion",
            "card",
            "tooltip"
        ]);
    }

    #[test]
    fn malformed_paths_are_skipped_individually() {
        let forest = build_tree(&[
            item("blank", ItemType::Theme, &["   "]),
            item("empty", ItemType::Unknown("registry:x".into()), &[""]),
            item("button", ItemType::Ui, &["button.tsx"]),
        ]);
        assert_tree_shape(&forest, &["folder components", "folder components/ui"]);
    }

    #[test]
    fn path_without_file_name_does_not_shadow_siblings() {
        let items = with_content(vec![
            item("broken", ItemType::Unknown("registry:x".into()), &["components/ui/"]),
            item("button", ItemType::Ui, &["button.tsx"]),
        ]);
        let forest = build_tree(&items);
        assert_tree_shape(&forest, &[
            "folder components",
            "folder components/ui",
            "file components/ui/button.tsx",
        ]);

        let forest = build_tree(&[
            item("broken", ItemType::Unknown("registry:x".into()), &["ui/"]),
            item("other", ItemType::Unknown("registry:x".into()), &["ui/other.ts"]),
        ]);
        assert_tree_shape(&forest, &["folder ui"]);
        assert_eq!(item_names(find_node(&forest, "ui")), vec!["other"]);
    }

    #[test]
    fn target_without_file_name_does_not_shadow_siblings() {
        let stray = item("stray", ItemType::Block, &["stray.tsx"])
            .with_target_for(0, "components/blocks/");
        let forest = build_tree(&with_content(vec![stray.clone(), login_form_block()]));
        assert_tree_shape(&forest, &[
            "folder components",
            "folder components/blocks",
            "file components/blocks/login-form.css",
            "file components/blocks/login-form.tsx",
        ]);

        let forest = build_tree(&[stray, login_form_block()]);
        assert_tree_shape(&forest, &[
            "folder components",
            "folder components/blocks",
            "block components/blocks/login-form",
        ]);
    }

    #[test]
    fn parent_segments_never_become_nodes() {
        let items = with_content(vec![
            item("x", ItemType::Lib, &["x.ts"]).with_target_for(0, "../lib/x.ts"),
        ]);
        assert_tree_shape(&build_tree(&items), &["folder lib", "file lib/x.ts"]);
    }

    // =========================================================================
    // Full mode
    // =========================================================================

    #[test]
    fn every_file_becomes_a_file_node() {
        let items = with_content(vec![
            item("chart", ItemType::Ui, &["chart.tsx"]),
            item("use-mobile", ItemType::Hook, &["use-mobile.ts"]),
            item("utils", ItemType::Lib, &["utils.ts", "format.ts"]),
        ]);
        let forest = build_tree(&items);
        assert_eq!(forest.mode, TreeMode::Full);
        assert_tree_shape(&forest, &[
            "folder components",
            "folder components/ui",
            "file components/ui/chart.tsx",
            "folder hooks",
            "file hooks/use-mobile.ts",
            "folder lib",
            "file lib/format.ts",
            "file lib/utils.ts",
        ]);
        let format = find_node(&forest, "lib/format.ts");
        assert_eq!(format.owner().unwrap().name, "utils");
        assert_eq!(format.files()[0].path, "format.ts");
    }

    #[test]
    fn full_mode_does_not_promote_blocks() {
        let items = with_content(vec![login_form_block()]);
        let forest = build_tree(&items);
        assert_tree_shape(&forest, &[
            "folder components",
            "folder components/blocks",
            "file components/blocks/login-form.css",
            "file components/blocks/login-form.tsx",
        ]);
    }

    #[test]
    fn folders_sort_before_files() {
        let items = with_content(vec![
            item("a", ItemType::File, &["zeta.md"]),
            item("b", ItemType::Lib, &["x.ts"]),
            item("c", ItemType::File, &["alpha.md"]),
        ]);
        let forest = build_tree(&items);
        let names: Vec<&str> = forest.roots().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["lib", "alpha.md", "zeta.md"]);
    }

    #[test]
    fn file_cannot_nest_under_file() {
        let items = with_content(vec![
            item("a", ItemType::File, &["config"]),
            item("b", ItemType::Unknown("x".into()), &["config/inner.ts"]),
        ]);
        let forest = build_tree(&items);
        assert_tree_shape(&forest, &["file config"]);
    }

    #[test]
    fn forced_mode_overrides_detection() {
        let items = with_content(vec![item("utils", ItemType::Lib, &["utils.ts", "cn.ts"])]);
        let forest = build_tree_with_mode(&items, TreeMode::Metadata);
        assert_tree_shape(&forest, &["folder lib"]);
        assert_eq!(item_names(find_node(&forest, "lib")), vec!["utils"]);
    }

    #[test]
    fn custom_layout_moves_files() {
        let layout = InstallLayout {
            ui: "src/ui".into(),
            ..InstallLayout::default()
        };
        let items = with_content(vec![item("button", ItemType::Ui, &["button.tsx"])]);
        let forest = build_tree_in(&items, TreeMode::Full, &layout);
        assert_tree_shape(&forest, &["folder src", "folder src/ui", "file src/ui/button.tsx"]);
    }

    // =========================================================================
    // Structure invariants
    // =========================================================================

    #[test]
    fn node_paths_join_ancestor_names() {
        let items = with_content(vec![
            item("x", ItemType::Unknown("x".into()), &["/a//b/./c.ts"]),
            item("y", ItemType::Ui, &["d.tsx"]),
        ]);
        let forest = build_tree(&items);
        let mut stack: Vec<String> = Vec::new();
        for (depth, node) in forest.walk() {
            stack.truncate(depth);
            stack.push(node.name.clone());
            assert_eq!(node.path, stack.join("/"));
            assert!(!node.path.ends_with('/'));
            assert!(!node.path.contains("//"));
        }
    }

    #[test]
    fn build_is_deterministic() {
        let items = vec![
            login_form_block(),
            item("button", ItemType::Ui, &["button.tsx"]),
            item("shared", ItemType::Lib, &["shared.ts"]),
        ];
        assert_eq!(build_tree(&items), build_tree(&items.clone()));

        let full = with_content(items);
        assert_eq!(build_tree(&full), build_tree(&full.clone()));
    }

    #[test]
    fn find_and_first_leaf() {
        let items = with_content(vec![item("utils", ItemType::Lib, &["utils.ts"])]);
        let forest = build_tree(&items);
        assert!(forest.find("lib/utils.ts").is_some());
        assert!(forest.find("lib/missing.ts").is_none());
        assert!(forest.find("").is_none());
        assert_eq!(forest.first_leaf().unwrap().path, "lib/utils.ts");
    }

    #[test]
    fn serializes_children_in_display_order() {
        let items = with_content(vec![
            item("a", ItemType::File, &["b.md"]),
            item("b", ItemType::Lib, &["x.ts"]),
        ]);
        let json = serde_json::to_value(build_tree(&items)).unwrap();
        assert_eq!(json["mode"], "full");
        assert_eq!(json["roots"][0]["name"], "lib");
        assert_eq!(json["roots"][0]["kind"], "folder");
        assert_eq!(json["roots"][0]["children"][0]["path"], "lib/x.ts");
        assert_eq!(json["roots"][1]["name"], "b.md");
    }
}
