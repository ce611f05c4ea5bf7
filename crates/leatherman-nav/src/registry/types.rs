//! Core types for the tool catalog

use serde::{Deserialize, Serialize};

/// A single tool reachable from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolItem {
    /// Identifier, unique within its category (e.g. "url-encode")
    pub id: String,
    /// Display name (e.g. "URL encode")
    pub label: String,
    /// Absolute route, unique across the whole catalog
    pub path: String,
    /// Optional grouping key; adjacent items sharing it form a sub-group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_group: Option<String>,
}

impl ToolItem {
    /// Create a new ungrouped tool.
    pub fn new(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            sub_group: None,
        }
    }

    /// Place the tool in a sub-group (builder pattern).
    pub fn in_group(mut self, key: impl Into<String>) -> Self {
        self.sub_group = Some(key.into());
        self
    }
}

/// A top-level section of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCategory {
    /// Identifier, unique across the catalog; doubles as the category's node id
    pub id: String,
    /// Display name (e.g. "Strings")
    pub label: String,
    /// Tools in declaration order; may be empty
    #[serde(default)]
    pub items: Vec<ToolItem>,
}

impl ToolCategory {
    /// Create a category with no items.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items: Vec::new(),
        }
    }

    /// Append a tool (builder pattern).
    pub fn with_item(mut self, item: ToolItem) -> Self {
        self.items.push(item);
        self
    }

    /// Whether the category renders as an expandable node.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Path of the first tool, used as the category's link target.
    pub fn first_path(&self) -> Option<&str> {
        self.items.first().map(|item| item.path.as_str())
    }

    /// Number of tools sharing the given sub-group key in this category.
    pub fn sub_group_len(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|item| item.sub_group.as_deref() == Some(key))
            .count()
    }

    /// Partition the items into display groups, preserving declaration order.
    ///
    /// Runs of adjacent items with the same sub-group key become one
    /// [`ItemGroup::SubGroup`] when the run has two or more members. Everything
    /// else (ungrouped tools and single-member groups) is an
    /// [`ItemGroup::Single`] rendered as a direct link.
    pub fn groups(&self) -> Vec<ItemGroup<'_>> {
        let mut groups: Vec<ItemGroup<'_>> = Vec::new();
        let mut run: Vec<&ToolItem> = Vec::new();
        let mut run_key: Option<&str> = None;

        for item in &self.items {
            let key = item.sub_group.as_deref();
            if key.is_some() && key == run_key {
                run.push(item);
                continue;
            }
            flush_run(&mut groups, run_key, std::mem::take(&mut run));
            run_key = key;
            run.push(item);
        }
        flush_run(&mut groups, run_key, run);

        groups
    }
}

fn flush_run<'a>(groups: &mut Vec<ItemGroup<'a>>, key: Option<&'a str>, run: Vec<&'a ToolItem>) {
    match (key, run.len()) {
        (_, 0) => {}
        (Some(key), n) if n > 1 => groups.push(ItemGroup::SubGroup { key, items: run }),
        _ => groups.extend(run.into_iter().map(ItemGroup::Single)),
    }
}

/// One entry of a category's partitioned item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemGroup<'a> {
    /// A tool shown as a direct link
    Single(&'a ToolItem),
    /// Two or more adjacent tools sharing a key, shown as a nested list
    SubGroup {
        key: &'a str,
        items: Vec<&'a ToolItem>,
    },
}

impl<'a> ItemGroup<'a> {
    /// The tools covered by this group, in declaration order.
    pub fn items(&self) -> Vec<&'a ToolItem> {
        match self {
            Self::Single(item) => vec![*item],
            Self::SubGroup { items, .. } => items.clone(),
        }
    }
}

/// A resolved catalog entry: the tool and the category that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRef<'a> {
    pub category: &'a ToolCategory,
    pub item: &'a ToolItem,
}

impl ItemRef<'_> {
    /// Sub-group key of the tool, but only when its group has more than one member.
    pub fn collapsible_group(&self) -> Option<&str> {
        self.item
            .sub_group
            .as_deref()
            .filter(|key| self.category.sub_group_len(key) > 1)
    }
}
