//! Breadcrumb Resolver
//!
//! Maps the current path to the labels of its breadcrumb trail. Stateless:
//! call it on every route change, as often as needed.

use crate::config::RoutesSection;
use crate::registry::Registry;
use crate::routing::{ROOT_PATH, is_root};
use serde::Serialize;

/// Label shown for the application root unless `[routes] home_label` overrides it.
pub const HOME_LABEL: &str = "Home";

/// Labels for one breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbLabels {
    pub category_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_label: Option<String>,
    /// Link target for the category crumb (the category's first tool)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_path: Option<String>,
}

impl BreadcrumbLabels {
    fn category_only(label: &str) -> Self {
        Self {
            category_label: label.to_string(),
            item_label: None,
            category_path: None,
        }
    }
}

/// Resolve `path` to breadcrumb labels.
///
/// Special routes are checked first, then catalog tools, then the root.
/// Returns `None` for anything else; callers render no breadcrumb then.
pub fn resolve(registry: &Registry, routes: &RoutesSection, path: &str) -> Option<BreadcrumbLabels> {
    if let Some(route) = routes.special.iter().find(|r| r.path == path) {
        return Some(BreadcrumbLabels::category_only(&route.label));
    }
    if let Some(found) = registry.find_by_path(path) {
        return Some(BreadcrumbLabels {
            category_label: found.category.label.clone(),
            item_label: Some(found.item.label.clone()),
            category_path: found.category.first_path().map(str::to_string),
        });
    }
    if is_root(path) {
        return Some(BreadcrumbLabels::category_only(&routes.home_label));
    }
    None
}

/// One rendered crumb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    /// Link target; `None` renders plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// The crumb for the page being viewed
    pub current: bool,
}

impl Crumb {
    fn link(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: Some(href.to_string()),
            current: false,
        }
    }

    fn text(label: &str, current: bool) -> Self {
        Self {
            label: label.to_string(),
            href: None,
            current,
        }
    }
}

/// Expand labels resolved for `path` into the ordered trail.
///
/// At the root the trail is a single current home crumb. Elsewhere it starts
/// with a link home, then the category (linked only when an item is shown),
/// then the current item.
pub fn trail(path: &str, labels: &BreadcrumbLabels, home_label: &str) -> Vec<Crumb> {
    if is_root(path) {
        return vec![Crumb::text(home_label, true)];
    }

    let mut crumbs = vec![Crumb::link(home_label, ROOT_PATH)];
    match (&labels.item_label, &labels.category_path) {
        (Some(item), Some(category_path)) => {
            crumbs.push(Crumb::link(&labels.category_label, category_path));
            crumbs.push(Crumb::text(item, true));
        }
        (Some(item), None) => {
            crumbs.push(Crumb::text(&labels.category_label, false));
            crumbs.push(Crumb::text(item, true));
        }
        (None, _) => crumbs.push(Crumb::text(&labels.category_label, false)),
    }
    crumbs
}

/// Render a trail as plain text, e.g. `Home / Strings / URL encode`.
pub fn render_trail(crumbs: &[Crumb]) -> String {
    crumbs
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}
