//! Case-insensitive substring search over the static catalog.

use super::catalog::{CatalogItem, CATALOG};

/// Filter the catalog by a free-text query.
///
/// Empty or whitespace-only queries yield an empty result set, not the
/// full catalog. Otherwise an item matches when its title or description
/// contains the lowercased query; results keep catalog order. The full
/// set is recomputed on every call - there is no caching.
pub fn search(query: &str) -> Vec<CatalogItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
