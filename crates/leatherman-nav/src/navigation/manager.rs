//! Route-driven expansion state machine

use super::{NavigationState, NodeId};
use crate::registry::Registry;
use std::sync::Arc;
use tracing::debug;

/// Nodes that must be open for the tool at `path` to be visible.
///
/// Returns the owning category's node and, when the tool sits in a sub-group
/// with more than one member, that sub-group's node. `None` when `path` is
/// not a catalog route.
pub fn expansion_for_path(registry: &Registry, path: &str) -> Option<Vec<NodeId>> {
    let found = registry.find_by_path(path)?;
    let mut nodes = vec![NodeId::category(&found.category.id)];
    if let Some(key) = found.collapsible_group() {
        nodes.push(NodeId::sub_group(&found.category.id, key));
    }
    Some(nodes)
}

/// Owns the expansion state of one sidebar instance.
#[derive(Debug, Clone)]
pub struct NavigationManager {
    registry: Arc<Registry>,
    state: NavigationState,
}

impl NavigationManager {
    /// Create a manager for a sidebar first rendered at `initial_path`.
    ///
    /// The path to the active tool is expanded up front so the first render
    /// already shows it open.
    pub fn new(registry: Arc<Registry>, initial_path: &str) -> Self {
        let state = match expansion_for_path(&registry, initial_path) {
            Some(nodes) => NavigationState::from_iter(nodes),
            None => NavigationState::new(),
        };
        debug!(path = initial_path, expanded = state.len(), "Navigation state initialised");
        Self { registry, state }
    }

    /// Current expansion state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Whether `node` is expanded.
    pub fn is_expanded(&self, node: &NodeId) -> bool {
        self.state.contains(node)
    }

    /// Flip a single node in response to a user click.
    pub fn toggle(&mut self, node: &NodeId) {
        self.state = self.state.toggled(node);
        debug!(node = %node, expanded = self.state.contains(node), "Toggled navigation node");
    }

    /// Expand the path to the tool at `path`.
    ///
    /// Additive: previously expanded nodes stay expanded. Returns `false`
    /// (and leaves the state alone) when `path` is not a catalog route.
    pub fn on_route_change(&mut self, path: &str) -> bool {
        match expansion_for_path(&self.registry, path) {
            Some(nodes) => {
                self.state = self.state.with_expanded(nodes);
                debug!(path, expanded = self.state.len(), "Expanded navigation for route");
                true
            }
            None => {
                debug!(path, "Route is not a catalog tool; navigation unchanged");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ToolCategory, ToolItem};

    fn registry() -> Arc<Registry> {
        let strings = ToolCategory::new("string", "Strings")
            .with_item(ToolItem::new("url-encode", "URL encode", "/s/url-encode").in_group("URL"))
            .with_item(ToolItem::new("url-decode", "URL decode", "/s/url-decode").in_group("URL"))
            .with_item(ToolItem::new("trim", "Trim", "/s/trim").in_group("Trim"));
        let json = ToolCategory::new("json", "JSON")
            .with_item(ToolItem::new("format", "Format", "/j/format"));
        Arc::new(Registry::new(vec![strings, json]).unwrap())
    }

    fn ids(manager: &NavigationManager) -> Vec<&str> {
        manager.state().iter().map(NodeId::as_str).collect()
    }

    #[test]
    fn test_initial_state_expands_active_tool() {
        let manager = NavigationManager::new(registry(), "/s/url-decode");
        assert_eq!(ids(&manager), vec!["string", "string--URL"]);
    }

    #[test]
    fn test_initial_state_unknown_path() {
        let manager = NavigationManager::new(registry(), "/settings");
        assert!(manager.state().is_empty());
    }

    #[test]
    fn test_singleton_group_not_expanded() {
        let manager = NavigationManager::new(registry(), "/s/trim");
        assert_eq!(ids(&manager), vec!["string"]);
    }

    #[test]
    fn test_route_change_is_additive() {
        let mut manager = NavigationManager::new(registry(), "/s/url-encode");
        assert!(manager.on_route_change("/j/format"));
        assert_eq!(ids(&manager), vec!["json", "string", "string--URL"]);
    }

    #[test]
    fn test_route_change_reopens_collapsed_parent() {
        let mut manager = NavigationManager::new(registry(), "/s/url-encode");
        manager.toggle(&NodeId::category("string"));
        assert!(!manager.is_expanded(&NodeId::category("string")));

        manager.on_route_change("/s/url-decode");
        assert!(manager.is_expanded(&NodeId::category("string")));
    }

    #[test]
    fn test_unmatched_route_is_noop() {
        let mut manager = NavigationManager::new(registry(), "/s/url-encode");
        let before = manager.state().clone();
        assert!(!manager.on_route_change("/nowhere"));
        assert_eq!(manager.state(), &before);
    }

    #[test]
    fn test_expansion_for_path() {
        let registry = registry();
        assert_eq!(
            expansion_for_path(&registry, "/s/url-encode"),
            Some(vec![NodeId::from("string"), NodeId::from("string--URL")])
        );
        assert_eq!(expansion_for_path(&registry, "/"), None);
    }
}
