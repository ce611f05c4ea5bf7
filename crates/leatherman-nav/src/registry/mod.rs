//! Tool Registry - the single source of truth for navigation structure
//!
//! Holds the ordered catalog of categories and tools and answers the two
//! lookups every other component needs: "which tool lives at this path" and
//! "how are this category's tools grouped for display".

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_ITEM_COUNT, builtin_categories};
pub use store::Registry;
pub use types::{ItemGroup, ItemRef, ToolCategory, ToolItem};
