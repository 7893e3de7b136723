//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Every entity leads with its identity (category slug, item name, node name)
//! and shows everything else as indented context lines underneath. Output
//! reads as an inventory of the registry rather than a dump of its JSON.
//!
//! # Output Format
//!
//! ## Categories
//!
//! ```text
//! 001 blocks (2 items)
//! 002 ui (12 items)
//! ```
//!
//! ## Items
//!
//! ```text
//! ui
//! 001 accordion
//!     A vertically stacked set of interactive headings.
//! 002 button
//! ```
//!
//! ## Tree
//!
//! ```text
//! components/
//!     blocks/
//!         login-form [block: login-form.tsx, login-form.css]
//!     ui/ [button, card]
//! lib/ [utils]
//! ```
//!
//! ## Show
//!
//! ```text
//! blocks/login-form
//!     Title: Login Form
//!     Files:
//!         login-form.tsx → components/blocks/login-form.tsx
//!         login-form.css → components/blocks/login-form.css
//!     Registry dependencies: button, card
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::grouping::{CategoryMap, group_by_category};
use crate::manifest::Registry;
use crate::renderable::is_renderable;
use crate::routes::{ItemDetail, Route};
use crate::target::base_name;
use crate::tree::{Forest, NodeKind, TreeMode, TreeNode};
use crate::types::RegistryItem;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

fn count(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

// ============================================================================
// Categories and items
// ============================================================================

/// One line per category with its item count.
pub fn format_categories(categories: &CategoryMap) -> Vec<String> {
    if categories.is_empty() {
        return vec!["No categories".to_string()];
    }
    categories
        .iter()
        .enumerate()
        .map(|(i, (slug, items))| {
            format!("{} {} ({})", format_index(i + 1), slug, count(items.len(), "item", "items"))
        })
        .collect()
}

pub fn print_categories(categories: &CategoryMap) {
    print_lines(format_categories(categories));
}

/// Items of one category, each with its description as a context line.
pub fn format_items(slug: &str, items: &[RegistryItem]) -> Vec<String> {
    let mut lines = vec![slug.to_string()];
    for (i, item) in items.iter().enumerate() {
        let mut header = format!("{} {}", format_index(i + 1), item.name);
        if !is_renderable(&item.files) {
            header.push_str(" (binary only)");
        }
        lines.push(header);
        if let Some(desc) = item.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("{}{}", indent(1), truncate_desc(desc, 60)));
        }
    }
    lines
}

pub fn print_items(slug: &str, items: &[RegistryItem]) {
    print_lines(format_items(slug, items));
}

// ============================================================================
// Tree
// ============================================================================

fn node_line(node: &TreeNode, depth: usize) -> String {
    let pad = indent(depth);
    match node.kind {
        NodeKind::Folder if node.items.is_empty() => format!("{pad}{}/", node.name),
        NodeKind::Folder => {
            let names: Vec<&str> = node.items.iter().map(|i| i.name.as_str()).collect();
            format!("{pad}{}/ [{}]", node.name, names.join(", "))
        }
        NodeKind::File => format!("{pad}{}", node.name),
        NodeKind::Block => {
            let files: Vec<&str> = node
                .files()
                .iter()
                .map(|f| base_name(&f.path))
                .collect();
            format!("{pad}{} [block: {}]", node.name, files.join(", "))
        }
    }
}

/// The forest as an indented outline, folders first at every level.
pub fn format_tree(forest: &Forest) -> Vec<String> {
    if forest.is_empty() {
        return vec!["(empty tree)".to_string()];
    }
    forest
        .walk()
        .into_iter()
        .map(|(depth, node)| node_line(node, depth))
        .collect()
}

pub fn print_tree(forest: &Forest) {
    print_lines(format_tree(forest));
}

// ============================================================================
// Item detail
// ============================================================================

pub fn format_detail(detail: &ItemDetail) -> Vec<String> {
    let mut lines = vec![format!("{}/{}", detail.category, detail.name)];
    if let Some(title) = &detail.title {
        lines.push(format!("{}Title: {}", indent(1), title));
    }
    if let Some(desc) = &detail.description {
        lines.push(format!("{}Description: {}", indent(1), desc));
    }
    if !detail.renderable {
        lines.push(format!("{}Binary only, no preview", indent(1)));
    }
    if !detail.files.is_empty() {
        lines.push(format!("{}Files:", indent(1)));
        for file in &detail.files {
            let mut line = format!("{}{} → {}", indent(2), file.path, file.target);
            if file.binary {
                line.push_str(" (binary)");
            }
            lines.push(line);
        }
    }
    if !detail.dependencies.is_empty() {
        lines.push(format!(
            "{}Dependencies: {}",
            indent(1),
            detail.dependencies.join(", ")
        ));
    }
    if !detail.registry_dependencies.is_empty() {
        lines.push(format!(
            "{}Registry dependencies: {}",
            indent(1),
            detail.registry_dependencies.join(", ")
        ));
    }
    lines
}

pub fn print_detail(detail: &ItemDetail) {
    print_lines(format_detail(detail));
}

// ============================================================================
// Routes and check
// ============================================================================

pub fn format_routes(routes: &[Route]) -> Vec<String> {
    routes.iter().map(|r| format!("/{}", r.path())).collect()
}

pub fn print_routes(routes: &[Route]) {
    print_lines(format_routes(routes));
}

/// Summary of a manifest: mode, counts, and items that will not get a page.
pub fn format_check(registry: &Registry) -> Vec<String> {
    let categories = group_by_category(&registry.items);
    let public: usize = categories.values().map(Vec::len).sum();
    let hidden = registry.items.len() - public;

    let mut lines = Vec::new();
    if let Some(name) = &registry.name {
        lines.push(name.clone());
    }
    let mode = match registry.mode() {
        TreeMode::Metadata => "metadata",
        TreeMode::Full => "full",
    };
    lines.push(format!("{}Mode: {mode}", indent(1)));
    lines.push(format!(
        "{}{} in {}",
        indent(1),
        count(public, "item", "items"),
        count(categories.len(), "category", "categories")
    ));
    if hidden > 0 {
        lines.push(format!("{}{} hidden", indent(1), hidden));
    }
    for (slug, items) in &categories {
        for item in items.iter().filter(|i| !is_renderable(&i.files)) {
            lines.push(format!("{}{}/{}: binary only", indent(1), slug, item.name));
        }
    }
    lines
}

pub fn print_check(registry: &Registry) {
    print_lines(format_check(registry));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstallLayout;
    use crate::taxonomy::ItemType;
    use crate::test_helpers::*;
    use crate::tree::build_tree;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    #[test]
    fn truncate_desc_long() {
        let text = "a".repeat(50);
        assert_eq!(truncate_desc(&text, 40), format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn truncate_desc_counts_chars_not_bytes() {
        assert_eq!(truncate_desc("ééé", 2), "éé...");
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(100), "100");
    }

    // =========================================================================
    // Commands
    // =========================================================================

    #[test]
    fn categories_with_counts() {
        let categories = group_by_category(&[
            item("button", ItemType::Ui, &[]),
            item("card", ItemType::Ui, &[]),
            item("login-form", ItemType::Block, &[]),
        ]);
        assert_eq!(format_categories(&categories), vec![
            "001 blocks (1 item)",
            "002 ui (2 items)"
        ]);
    }

    #[test]
    fn no_categories() {
        assert_eq!(format_categories(&CategoryMap::new()), vec!["No categories"]);
    }

    #[test]
    fn items_with_descriptions_and_binary_marker() {
        let mut button = item("button", ItemType::Ui, &["button.tsx"]);
        button.description = Some("Displays a button.".into());
        let inter = item("inter", ItemType::Font, &["inter.woff2"]);
        assert_eq!(format_items("ui", &[button, inter]), vec![
            "ui",
            "001 button",
            "    Displays a button.",
            "002 inter (binary only)",
        ]);
    }

    #[test]
    fn tree_outline() {
        let forest = build_tree(&[
            login_form_block(),
            item("card", ItemType::Ui, &["card.tsx"]),
            item("button", ItemType::Ui, &["button.tsx"]),
        ]);
        assert_eq!(format_tree(&forest), vec![
            "components/",
            "    blocks/",
            "        login-form [block: login-form.tsx, login-form.css]",
            "    ui/ [button, card]",
        ]);
    }

    #[test]
    fn empty_tree() {
        assert_eq!(format_tree(&build_tree(&[])), vec!["(empty tree)"]);
    }

    #[test]
    fn detail_lines() {
        let mut block = login_form_block();
        block.title = Some("Login Form".into());
        block.registry_dependencies = vec!["button".into(), "card".into()];
        let detail = ItemDetail::new(&block, "blocks", &InstallLayout::default());
        assert_eq!(format_detail(&detail), vec![
            "blocks/login-form",
            "    Title: Login Form",
            "    Files:",
            "        login-form.tsx → components/blocks/login-form.tsx",
            "        login-form.css → components/blocks/login-form.css",
            "    Registry dependencies: button, card",
        ]);
    }

    #[test]
    fn routes_are_rooted() {
        let routes = vec![Route {
            category: "ui",
            item: "button".into(),
        }];
        assert_eq!(format_routes(&routes), vec!["/ui/button"]);
    }

    #[test]
    fn check_summary() {
        let mut registry = Registry::new(vec![
            item("button", ItemType::Ui, &["button.tsx"]),
            item("inter", ItemType::Font, &["inter.woff2"]),
            item("index", ItemType::Internal, &["index.ts"]),
        ]);
        registry.name = Some("acme".into());
        assert_eq!(format_check(&registry), vec![
            "acme",
            "    Mode: metadata",
            "    2 items in 2 categories",
            "    1 hidden",
            "    fonts/inter: binary only",
        ]);
    }
}
