//! Navigation session - the router and the views it drives
//!
//! A session commits route changes and, before returning control, applies
//! the resulting expansion. Callers therefore never observe an active tool
//! inside a collapsed category.

use crate::breadcrumb::{self, BreadcrumbLabels, Crumb};
use crate::config::Config;
use crate::descriptions::DescriptionSource;
use crate::navigation::{NavigationManager, NavigationState, NodeId};
use crate::registry::Registry;
use crate::routing::RouteTable;
use crate::search::{CommandPalette, Navigator, SearchEntry, SearchIndex};
use crate::sidebar::SidebarView;
use crate::Result;
use std::sync::Arc;
use tracing::debug;

pub struct NavigationSession {
    routes: RouteTable,
    descriptions: Arc<dyn DescriptionSource>,
    current: String,
    manager: NavigationManager,
    index: SearchIndex,
}

impl NavigationSession {
    /// Start a session on `start_path`.
    ///
    /// The start path goes through the routing table like any other request,
    /// and the sidebar state is derived from the committed path before the
    /// session is handed back.
    pub fn new(
        registry: Arc<Registry>,
        descriptions: Arc<dyn DescriptionSource>,
        config: &Config,
        start_path: &str,
    ) -> Result<Self> {
        let routes = RouteTable::new(Arc::clone(&registry), &config.routes)?;
        let current = routes.commit_target(start_path).to_string();
        let manager = NavigationManager::new(registry, &current);
        debug!(start = start_path, committed = %current, "Navigation session started");
        Ok(Self {
            routes,
            descriptions,
            current,
            manager,
            index: SearchIndex::new(),
        })
    }

    /// Navigate to `path` and return the breadcrumb for the committed route.
    ///
    /// Unknown paths and the root land on the default route. Expansion for
    /// the new route is applied before this returns.
    pub fn navigate(&mut self, path: &str) -> Option<BreadcrumbLabels> {
        let target = self.routes.commit_target(path).to_string();
        debug!(requested = path, committed = %target, "Route committed");
        self.current = target;
        self.manager.on_route_change(&self.current);
        self.breadcrumb()
    }

    /// Flip a sidebar node.
    pub fn toggle(&mut self, node: &NodeId) {
        self.manager.toggle(node);
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn state(&self) -> &NavigationState {
        self.manager.state()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn registry(&self) -> &Arc<Registry> {
        self.routes.registry()
    }

    /// Breadcrumb labels for the current route.
    pub fn breadcrumb(&self) -> Option<BreadcrumbLabels> {
        breadcrumb::resolve(self.registry(), self.routes.section(), &self.current)
    }

    /// The rendered breadcrumb trail for the current route; empty when
    /// the route has no breadcrumb.
    pub fn breadcrumb_trail(&self) -> Vec<Crumb> {
        self.breadcrumb()
            .map(|labels| breadcrumb::trail(&self.current, &labels, self.routes.home_label()))
            .unwrap_or_default()
    }

    /// The sidebar for the current route, or `None` where it is hidden.
    pub fn sidebar(&self) -> Option<SidebarView> {
        if !self.routes.shows_sidebar(&self.current) {
            return None;
        }
        Some(SidebarView::project(
            self.registry(),
            self.manager.state(),
            &self.current,
        ))
    }

    /// Search entries, rebuilt only when the description source changed.
    pub fn search_entries(&mut self) -> Arc<[SearchEntry]> {
        let registry = Arc::clone(self.routes.registry());
        self.index.entries(&registry, &self.descriptions)
    }

    /// Replace the description source; the next search rebuilds the index.
    pub fn set_descriptions(&mut self, descriptions: Arc<dyn DescriptionSource>) {
        self.descriptions = descriptions;
    }

    /// A closed palette over the current search entries.
    pub fn palette(&mut self) -> CommandPalette {
        CommandPalette::new(self.search_entries())
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }
}

impl Navigator for NavigationSession {
    fn navigate(&mut self, path: &str) {
        NavigationSession::navigate(self, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptions::Descriptions;

    fn session(start: &str) -> NavigationSession {
        NavigationSession::new(
            Arc::new(Registry::builtin()),
            Arc::new(Descriptions::builtin()),
            &Config::default(),
            start,
        )
        .unwrap()
    }

    #[test]
    fn test_root_redirects_to_default() {
        let session = session("/");
        assert_eq!(session.current_path(), "/tools/string/url-encode");
        assert!(session.state().contains(&NodeId::from("string--URL")));
    }

    #[test]
    fn test_navigate_expands_before_returning() {
        let mut session = session("/tools/string/trim");
        let labels = session.navigate("/tools/json/diff").unwrap();
        assert_eq!(labels.item_label.as_deref(), Some("Diff"));
        assert!(session.state().contains(&NodeId::from("json")));
        assert!(session.state().contains(&NodeId::from("string")));
    }

    #[test]
    fn test_settings_hides_sidebar() {
        let mut session = session("/tools/json/format");
        let labels = session.navigate("/settings").unwrap();
        assert_eq!(labels.category_label, "Settings");
        assert!(session.sidebar().is_none());
    }

    #[test]
    fn test_breadcrumb_trail_uses_home_label() {
        let config = Config::parse("[routes]\nhome_label = \"Start\"").unwrap();
        let session = NavigationSession::new(
            Arc::new(Registry::builtin()),
            Arc::new(Descriptions::builtin()),
            &config,
            "/tools/json/diff",
        )
        .unwrap();
        let labels: Vec<_> = session.breadcrumb_trail().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Start", "JSON", "Diff"]);
    }

    #[test]
    fn test_search_index_memoised() {
        let mut session = session("/");
        session.search_entries();
        session.search_entries();
        assert_eq!(session.index().builds(), 1);

        session.set_descriptions(Arc::new(Descriptions::new()));
        session.search_entries();
        assert_eq!(session.index().builds(), 2);
    }

    #[test]
    fn test_palette_round_trip() {
        let mut session = session("/");
        let mut palette = session.palette();
        palette.open();
        palette.set_query("pretty");
        assert!(palette.filter().iter().any(|e| e.id == "format"));

        assert!(palette.select("format", &mut session));
        assert_eq!(session.current_path(), "/tools/json/format");
        assert!(session.state().contains(&NodeId::from("json")));
    }
}
