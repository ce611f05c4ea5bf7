//! Shared test fixtures for the leatherman workspace.
//!
//! Dev-dependency only. Provides the small reference catalog used across
//! crate test suites, its descriptions, and a temp-dir helper for config
//! and catalog files.

pub mod catalog;
pub mod files;

pub use catalog::{scenario_descriptions, scenario_registry, SCENARIO_CATALOG_TOML};
pub use files::TestDir;
