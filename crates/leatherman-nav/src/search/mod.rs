//! Search Index and command palette
//!
//! The index flattens the catalog into uniform entries; the palette filters
//! them by query and turns a selection into a navigation request.

mod index;
mod palette;

pub use index::{SearchEntry, SearchIndex, build_entries};
pub use palette::{CommandPalette, Navigator, matches_query};
