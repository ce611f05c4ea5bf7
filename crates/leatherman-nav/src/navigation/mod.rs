//! Navigation State Manager
//!
//! Keeps the sidebar's expanded nodes in step with the active route. Route
//! changes only ever expand; collapsing is left to explicit user toggles.

mod manager;
mod state;

pub use manager::{NavigationManager, expansion_for_path};
pub use state::{NavigationState, NodeId, SUB_GROUP_SEPARATOR};
