//! Navigation core for the Leatherman tool dashboard.
//!
//! The dashboard presents many small text tools in a sidebar tree, a
//! breadcrumb bar and a quick-open palette. This crate holds everything
//! those views derive from:
//!
//! - [`registry`] - the static, ordered tool catalog
//! - [`navigation`] - expansion state that follows the active route
//! - [`breadcrumb`] - path to breadcrumb labels
//! - [`search`] - the flattened search index and the command palette
//!
//! [`NavigationSession`] wires them to a [`RouteTable`] so that a committed
//! route change and the sidebar expansion it causes happen in one step.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use leatherman_nav::{Config, Descriptions, NavigationSession, NodeId, Registry};
//!
//! let mut session = NavigationSession::new(
//!     Arc::new(Registry::builtin()),
//!     Arc::new(Descriptions::builtin()),
//!     &Config::default(),
//!     "/tools/string/url-encode",
//! ).unwrap();
//!
//! session.navigate("/tools/json/format");
//! assert!(session.state().contains(&NodeId::category("string")));
//! assert!(session.state().contains(&NodeId::category("json")));
//! ```

pub mod breadcrumb;
pub mod config;
pub mod descriptions;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod registry;
pub mod routing;
pub mod search;
pub mod session;
pub mod sidebar;

pub use breadcrumb::{BreadcrumbLabels, Crumb, HOME_LABEL};
pub use config::{Config, RoutesSection, SpecialRoute};
pub use descriptions::{DescriptionSource, Descriptions};
pub use error::{Error, Result};
pub use navigation::{NavigationManager, NavigationState, NodeId};
pub use registry::{ItemGroup, ItemRef, Registry, ToolCategory, ToolItem};
pub use routing::{RouteMatch, RouteTable};
pub use search::{CommandPalette, Navigator, SearchEntry, SearchIndex};
pub use session::NavigationSession;
pub use sidebar::SidebarView;
