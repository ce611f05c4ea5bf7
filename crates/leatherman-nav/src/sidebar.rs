//! Sidebar projection
//!
//! Combines the catalog, the expansion state and the active route into a
//! render tree. Collapsed nodes keep their children; a renderer hides them.

use crate::navigation::{NavigationState, NodeId};
use crate::registry::{ItemGroup, Registry, ToolItem};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkNode {
    pub label: String,
    pub path: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupNode {
    pub node: NodeId,
    pub label: String,
    pub expanded: bool,
    pub links: Vec<LinkNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SidebarEntry {
    Link(LinkNode),
    Group(GroupNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    pub node: NodeId,
    pub label: String,
    /// Empty categories render as a plain leaf
    pub expandable: bool,
    pub expanded: bool,
    pub entries: Vec<SidebarEntry>,
}

/// The full sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub categories: Vec<CategoryNode>,
}

impl SidebarView {
    /// Project `registry` through `state`, marking the tool at `active_path`.
    pub fn project(registry: &Registry, state: &NavigationState, active_path: &str) -> Self {
        let link = |item: &ToolItem| LinkNode {
            label: item.label.clone(),
            path: item.path.clone(),
            active: item.path == active_path,
        };

        let categories = registry
            .categories()
            .iter()
            .map(|category| {
                let node = NodeId::category(&category.id);
                let entries = category
                    .groups()
                    .into_iter()
                    .map(|group| match group {
                        ItemGroup::Single(item) => SidebarEntry::Link(link(item)),
                        ItemGroup::SubGroup { key, items } => {
                            let node = NodeId::sub_group(&category.id, key);
                            SidebarEntry::Group(GroupNode {
                                expanded: state.contains(&node),
                                node,
                                label: key.to_string(),
                                links: items.into_iter().map(link).collect(),
                            })
                        }
                    })
                    .collect();

                CategoryNode {
                    expandable: category.has_items(),
                    expanded: state.contains(&node),
                    node,
                    label: category.label.clone(),
                    entries,
                }
            })
            .collect();

        Self { categories }
    }

    /// Plain-text rendering with the children of collapsed nodes hidden.
    ///
    /// `▼`/`▶` mark expanded/collapsed nodes, `○` an empty category and `*`
    /// the active tool.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for category in &self.categories {
            let chevron = match (category.expandable, category.expanded) {
                (false, _) => '○',
                (true, true) => '▼',
                (true, false) => '▶',
            };
            let _ = writeln!(out, "{} {}", chevron, category.label);
            if !category.expanded {
                continue;
            }
            for entry in &category.entries {
                match entry {
                    SidebarEntry::Link(link) => render_link(&mut out, link, 1),
                    SidebarEntry::Group(group) => {
                        let chevron = if group.expanded { '▼' } else { '▶' };
                        let _ = writeln!(out, "  {} {}", chevron, group.label);
                        if group.expanded {
                            for link in &group.links {
                                render_link(&mut out, link, 2);
                            }
                        }
                    }
                }
            }
        }
        out
    }
}

fn render_link(out: &mut String, link: &LinkNode, depth: usize) {
    let marker = if link.active { '*' } else { ' ' };
    let _ = writeln!(out, "{}{} {}", "  ".repeat(depth), marker, link.label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ToolCategory, ToolItem};

    fn registry() -> Registry {
        let strings = ToolCategory::new("string", "Strings")
            .with_item(ToolItem::new("url-encode", "URL encode", "/s/url-encode").in_group("URL"))
            .with_item(ToolItem::new("url-decode", "URL decode", "/s/url-decode").in_group("URL"))
            .with_item(ToolItem::new("trim", "Trim", "/s/trim").in_group("Trim"));
        Registry::new(vec![strings, ToolCategory::new("other", "Other")]).unwrap()
    }

    #[test]
    fn test_project_structure() {
        let state: NavigationState = [NodeId::from("string")].into_iter().collect();
        let view = SidebarView::project(&registry(), &state, "/s/trim");

        let strings = &view.categories[0];
        assert!(strings.expandable && strings.expanded);
        assert_eq!(strings.entries.len(), 2);
        match &strings.entries[0] {
            SidebarEntry::Group(group) => {
                assert_eq!(group.node.as_str(), "string--URL");
                assert!(!group.expanded);
                assert_eq!(group.links.len(), 2);
            }
            other => panic!("expected group, got {:?}", other),
        }
        assert!(matches!(&strings.entries[1], SidebarEntry::Link(link) if link.active));

        let other = &view.categories[1];
        assert!(!other.expandable);
        assert!(other.entries.is_empty());
    }

    #[test]
    fn test_render_text() {
        let state: NavigationState = [NodeId::from("string"), NodeId::from("string--URL")]
            .into_iter()
            .collect();
        let text = SidebarView::project(&registry(), &state, "/s/url-decode").render_text();
        assert_eq!(
            text,
            "▼ Strings\n  ▼ URL\n      URL encode\n    * URL decode\n    Trim\n○ Other\n"
        );
    }
}
