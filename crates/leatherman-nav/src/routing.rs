//! Explicit routing table
//!
//! Routes are literal strings matched by exact equality: every catalog path,
//! a short list of special routes, the root, and one default fallback for
//! everything else.

use crate::config::{RoutesSection, SpecialRoute};
use crate::registry::{ItemRef, Registry};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::debug;

/// The application root.
pub const ROOT_PATH: &str = "/";

/// Whether `path` addresses the application root.
pub fn is_root(path: &str) -> bool {
    path.is_empty() || path == ROOT_PATH
}

/// Outcome of matching a path against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    /// A catalog tool
    Tool(ItemRef<'a>),
    /// A non-catalog route such as settings
    Special(&'a SpecialRoute),
    /// The application root
    Home,
    /// Nothing matched; the router lands on the default route
    Fallback,
}

/// Ordered literal routes plus a default fallback.
#[derive(Debug, Clone)]
pub struct RouteTable {
    registry: Arc<Registry>,
    section: RoutesSection,
    default: String,
}

impl RouteTable {
    /// Build the table for `registry` using the `[routes]` configuration.
    ///
    /// The default route must itself be routable. When none is configured,
    /// the first catalog tool is used.
    pub fn new(registry: Arc<Registry>, routes: &RoutesSection) -> Result<Self> {
        for route in &routes.special {
            if let Some(found) = registry.find_by_path(&route.path) {
                return Err(Error::DuplicatePath {
                    path: route.path.clone(),
                    first: found.category.id.clone(),
                    second: route.label.clone(),
                });
            }
        }

        let default = match routes.default.as_deref() {
            Some(path) => path.to_string(),
            None => registry
                .first_path()
                .or_else(|| routes.special.first().map(|r| r.path.as_str()))
                .ok_or_else(|| Error::config("no default route: catalog and special routes are empty"))?
                .to_string(),
        };

        let table = Self {
            registry,
            section: routes.clone(),
            default,
        };
        if matches!(table.resolve(&table.default), RouteMatch::Home | RouteMatch::Fallback) {
            return Err(Error::config(format!(
                "default route {} is not a known route",
                table.default
            )));
        }
        Ok(table)
    }

    /// Match `path` by exact string equality.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        if let Some(found) = self.registry.find_by_path(path) {
            return RouteMatch::Tool(found);
        }
        if let Some(route) = self.special_route(path) {
            return RouteMatch::Special(route);
        }
        if is_root(path) {
            return RouteMatch::Home;
        }
        RouteMatch::Fallback
    }

    /// The path the router actually commits when asked for `path`.
    ///
    /// Catalog and special routes commit as-is; the root and unknown paths
    /// redirect to the default route.
    pub fn commit_target<'a>(&'a self, path: &'a str) -> &'a str {
        match self.resolve(path) {
            RouteMatch::Tool(_) | RouteMatch::Special(_) => path,
            RouteMatch::Home | RouteMatch::Fallback => {
                debug!(requested = path, target = %self.default, "Redirecting to default route");
                &self.default
            }
        }
    }

    /// Look up a special route by path.
    pub fn special_route(&self, path: &str) -> Option<&SpecialRoute> {
        self.section.special.iter().find(|r| r.path == path)
    }

    /// Whether the sidebar is rendered on `path`.
    pub fn shows_sidebar(&self, path: &str) -> bool {
        self.special_route(path).is_none_or(|r| r.show_sidebar)
    }

    /// All literal routes: catalog paths in declaration order, then special routes.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.registry
            .items()
            .map(|r| r.item.path.as_str())
            .chain(self.section.special.iter().map(|r| r.path.as_str()))
    }

    pub fn default_route(&self) -> &str {
        &self.default
    }

    pub fn special_routes(&self) -> &[SpecialRoute] {
        &self.section.special
    }

    /// The `[routes]` configuration the table was built from.
    pub fn section(&self) -> &RoutesSection {
        &self.section
    }

    pub fn home_label(&self) -> &str {
        &self.section.home_label
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}
