//! Catalog storage and lookups

use super::{ItemRef, ToolCategory, ToolItem};
use crate::navigation::SUB_GROUP_SEPARATOR;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// The ordered, immutable tool catalog.
///
/// Built once at startup and shared by reference (usually behind an `Arc`);
/// nothing mutates it afterwards. Construction validates the catalog
/// invariants, so every lookup afterwards is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    categories: Vec<ToolCategory>,
    /// path -> (category index, item index)
    by_path: HashMap<String, (usize, usize)>,
}

/// On-disk catalog format: a list of `[[categories]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<ToolCategory>,
}

impl Registry {
    /// Build a registry, validating the catalog invariants.
    ///
    /// Fails when a path is reused anywhere, when an id repeats within a
    /// category, when two categories share an id, or when a sub-group's
    /// items are interleaved with other items.
    pub fn new(categories: Vec<ToolCategory>) -> Result<Self> {
        validate(&categories)?;
        Ok(Self::index(categories))
    }

    /// The compiled-in dashboard catalog.
    pub fn builtin() -> Self {
        Self::index(super::builtins::builtin_categories())
    }

    /// Parse a catalog from TOML content.
    ///
    /// # Example
    ///
    /// ```
    /// use leatherman_nav::Registry;
    ///
    /// let registry = Registry::from_toml(r#"
    /// [[categories]]
    /// id = "json"
    /// label = "JSON"
    ///
    /// [[categories.items]]
    /// id = "format"
    /// label = "Format"
    /// path = "/tools/json/format"
    /// "#).unwrap();
    ///
    /// assert_eq!(registry.item_count(), 1);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.categories)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            categories = registry.categories.len(),
            items = registry.item_count(),
            "Loaded tool catalog"
        );
        Ok(registry)
    }

    fn index(categories: Vec<ToolCategory>) -> Self {
        let by_path = categories
            .iter()
            .enumerate()
            .flat_map(|(ci, category)| {
                category
                    .items
                    .iter()
                    .enumerate()
                    .map(move |(ii, item)| (item.path.clone(), (ci, ii)))
            })
            .collect();
        Self {
            categories,
            by_path,
        }
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[ToolCategory] {
        &self.categories
    }

    /// Get a category by id.
    pub fn category(&self, id: &str) -> Option<&ToolCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find the tool registered at `path`, together with its category.
    pub fn find_by_path(&self, path: &str) -> Option<ItemRef<'_>> {
        let &(ci, ii) = self.by_path.get(path)?;
        let category = &self.categories[ci];
        Some(ItemRef {
            category,
            item: &category.items[ii],
        })
    }

    /// Check if a tool is registered at `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Iterate over every tool in declaration order.
    pub fn items(&self) -> impl Iterator<Item = ItemRef<'_>> {
        self.categories.iter().flat_map(|category| {
            category
                .items
                .iter()
                .map(move |item| ItemRef { category, item })
        })
    }

    /// Total number of tools across all categories.
    pub fn item_count(&self) -> usize {
        self.by_path.len()
    }

    /// Path of the first tool in the catalog, if any.
    pub fn first_path(&self) -> Option<&str> {
        self.categories.iter().find_map(ToolCategory::first_path)
    }

    /// Check if the registry has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn validate(categories: &[ToolCategory]) -> Result<()> {
    let mut category_ids = HashSet::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for category in categories {
        check_separator("category id", &category.id)?;
        if !category_ids.insert(category.id.as_str()) {
            return Err(Error::DuplicateCategory {
                id: category.id.clone(),
            });
        }

        let mut item_ids = HashSet::new();
        for item in &category.items {
            if !item.path.starts_with('/') {
                return Err(Error::InvalidPath {
                    path: item.path.clone(),
                });
            }
            if let Some(key) = &item.sub_group {
                check_separator("sub-group key", key)?;
            }
            if !item_ids.insert(item.id.as_str()) {
                return Err(Error::DuplicateItemId {
                    category: category.id.clone(),
                    id: item.id.clone(),
                });
            }
            if let Some(first) = owners.insert(item.path.as_str(), category.id.as_str()) {
                return Err(Error::DuplicatePath {
                    path: item.path.clone(),
                    first: first.to_string(),
                    second: category.id.clone(),
                });
            }
        }

        check_contiguous_groups(category)?;
    }

    Ok(())
}

fn check_separator(kind: &'static str, value: &str) -> Result<()> {
    if value.contains(SUB_GROUP_SEPARATOR) {
        return Err(Error::ReservedSeparator {
            kind,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_contiguous_groups(category: &ToolCategory) -> Result<()> {
    let mut closed: HashSet<&str> = HashSet::new();
    let mut current: Option<&str> = None;

    for key in category.items.iter().map(|item: &ToolItem| item.sub_group.as_deref()) {
        if key == current {
            continue;
        }
        if let Some(prev) = current {
            closed.insert(prev);
        }
        if let Some(key) = key {
            if closed.contains(key) {
                return Err(Error::SplitSubGroup {
                    category: category.id.clone(),
                    sub_group: key.to_string(),
                });
            }
        }
        current = key;
    }
    Ok(())
}
