//! Flattened, memoised projection of the catalog

use crate::descriptions::DescriptionSource;
use crate::registry::Registry;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// One search-ready record derived from a catalog tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub id: String,
    pub label: String,
    /// Empty when the tool has no description
    pub description: String,
    pub path: String,
    pub category_label: String,
}

impl SearchEntry {
    /// Text the palette matches against: label, category label, description.
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.label, self.category_label, self.description)
    }
}

/// Flatten `registry` into one entry per tool, in declaration order.
pub fn build_entries(registry: &Registry, descriptions: &dyn DescriptionSource) -> Vec<SearchEntry> {
    registry
        .items()
        .map(|found| SearchEntry {
            id: found.item.id.clone(),
            label: found.item.label.clone(),
            description: descriptions
                .describe(&found.item.id)
                .unwrap_or_default()
                .to_string(),
            path: found.item.path.clone(),
            category_label: found.category.label.clone(),
        })
        .collect()
}

struct Cached {
    registry: Arc<Registry>,
    descriptions: Arc<dyn DescriptionSource>,
    entries: Arc<[SearchEntry]>,
}

/// Memoises [`build_entries`] on the identity of its two inputs.
///
/// Asking again with the same `Arc`s returns the cached entries; passing a
/// different registry or description source (by pointer, not by value)
/// rebuilds them.
#[derive(Default)]
pub struct SearchIndex {
    cached: Option<Cached>,
    builds: usize,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for the given inputs, rebuilding only if either changed identity.
    pub fn entries(
        &mut self,
        registry: &Arc<Registry>,
        descriptions: &Arc<dyn DescriptionSource>,
    ) -> Arc<[SearchEntry]> {
        if let Some(cached) = &self.cached {
            if Arc::ptr_eq(&cached.registry, registry)
                && std::ptr::addr_eq(Arc::as_ptr(&cached.descriptions), Arc::as_ptr(descriptions))
            {
                return Arc::clone(&cached.entries);
            }
        }

        let entries: Arc<[SearchEntry]> = build_entries(registry, descriptions.as_ref()).into();
        self.builds += 1;
        debug!(entries = entries.len(), builds = self.builds, "Rebuilt search index");

        self.cached = Some(Cached {
            registry: Arc::clone(registry),
            descriptions: Arc::clone(descriptions),
            entries: Arc::clone(&entries),
        });
        entries
    }

    /// How many times the entries have been rebuilt.
    pub fn builds(&self) -> usize {
        self.builds
    }
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("cached", &self.cached.as_ref().map(|c| c.entries.len()))
            .field("builds", &self.builds)
            .finish()
    }
}
