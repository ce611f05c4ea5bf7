//! Expansion state of the navigation tree

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Joins a category id and a sub-group key into a sub-group node id.
pub const SUB_GROUP_SEPARATOR: &str = "--";

/// Identifies an expandable node in the sidebar tree.
///
/// Either a bare category id (`"string"`) or a sub-group scoped to its
/// category (`"string--URL"`). Scoping keeps two categories that reuse a
/// sub-group key independent of each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Node id of a category.
    pub fn category(category_id: &str) -> Self {
        Self(category_id.to_string())
    }

    /// Node id of a sub-group within a category.
    pub fn sub_group(category_id: &str, key: &str) -> Self {
        Self(format!("{}{}{}", category_id, SUB_GROUP_SEPARATOR, key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The set of expanded node ids.
///
/// A value type: transitions return a new state and leave the receiver
/// untouched. Ordered so that iteration and debug output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationState {
    expanded: BTreeSet<NodeId>,
}

impl NavigationState {
    /// A state with nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `node` is expanded.
    pub fn contains(&self, node: &NodeId) -> bool {
        self.expanded.contains(node)
    }

    /// Symmetric difference with `{node}`: collapses an expanded node,
    /// expands a collapsed one.
    #[must_use]
    pub fn toggled(&self, node: &NodeId) -> Self {
        let mut expanded = self.expanded.clone();
        if !expanded.remove(node) {
            expanded.insert(node.clone());
        }
        Self { expanded }
    }

    /// Union with `nodes`. Never removes anything.
    #[must_use]
    pub fn with_expanded<I>(&self, nodes: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut expanded = self.expanded.clone();
        expanded.extend(nodes);
        Self { expanded }
    }

    /// Whether every node expanded in `other` is also expanded here.
    pub fn is_superset(&self, other: &NavigationState) -> bool {
        self.expanded.is_superset(&other.expanded)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.expanded.iter()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

impl FromIterator<NodeId> for NavigationState {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}
