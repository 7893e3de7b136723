//! Partitioning of items into public categories.
//!
//! Every item whose type has a slug lands in exactly one bucket; everything
//! else (internal plumbing, tags we do not recognize) is dropped without
//! complaint. Buckets keep the manifest's relative order, and a category with
//! no items never appears as a key.

use crate::taxonomy::type_to_slug;
use crate::types::RegistryItem;
use std::collections::BTreeMap;

/// Category slug → items, in manifest order within each bucket.
pub type CategoryMap = BTreeMap<&'static str, Vec<RegistryItem>>;

/// Group items by the category slug of their type.
pub fn group_by_category(items: &[RegistryItem]) -> CategoryMap {
    let mut categories = CategoryMap::new();
    let mut hidden = 0usize;
    for item in items {
        match type_to_slug(&item.item_type) {
            Some(slug) => categories.entry(slug).or_default().push(item.clone()),
            None => hidden += 1,
        }
    }
    if hidden > 0 {
        tracing::debug!(hidden, "items without a public category left out");
    }
    categories
}

/// Items of every category, flattened back into one list (category order).
pub fn flatten(categories: &CategoryMap) -> Vec<RegistryItem> {
    categories.values().flatten().cloned().collect()
}

/// Find an item by category slug and name.
///
/// When a category holds the same name more than once, the last occurrence
/// wins, matching how the tree builder merges duplicates.
pub fn find_item<'a>(
    categories: &'a CategoryMap,
    slug: &str,
    name: &str,
) -> Option<&'a RegistryItem> {
    categories
        .get(slug)?
        .iter()
        .rev()
        .find(|item| item.name == name)
}
