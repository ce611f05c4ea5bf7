//! Command implementations for leatherman-cli

pub mod breadcrumb;
pub mod routes;
pub mod search;
pub mod session;
pub mod tree;

pub use breadcrumb::run_breadcrumb;
pub use routes::run_routes;
pub use search::run_search;
pub use session::run_session;
pub use tree::run_tree;
