//! Shared state every command starts from

use leatherman_nav::config::CONFIG_FILE_NAME;
use leatherman_nav::{Config, DescriptionSource, Descriptions, NavigationSession, Registry};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;

/// Catalog, descriptions and configuration resolved from the CLI flags.
pub struct AppContext {
    pub registry: Arc<Registry>,
    pub descriptions: Arc<dyn DescriptionSource>,
    pub config: Config,
}

impl AppContext {
    /// Resolve the context.
    ///
    /// An explicit `--config` must exist; without one, `leatherman.toml` in
    /// `cwd` is used when present. Without `--catalog` the built-in catalog
    /// and its descriptions are used.
    pub fn load(cwd: &Path, config: Option<&Path>, catalog: Option<&Path>) -> Result<Self> {
        let config = match config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(&cwd.join(CONFIG_FILE_NAME))?,
        };
        let registry = match catalog {
            Some(path) => Registry::load(path)?,
            None => Registry::builtin(),
        };
        tracing::debug!(
            categories = registry.categories().len(),
            items = registry.item_count(),
            "Context loaded"
        );

        Ok(Self {
            registry: Arc::new(registry),
            descriptions: Arc::new(Descriptions::builtin()),
            config,
        })
    }

    /// Convenience for `load` from CLI flag values.
    pub fn from_flags(config: Option<PathBuf>, catalog: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd, config.as_deref(), catalog.as_deref())
    }

    /// Open a navigation session on `start_path`.
    pub fn session(&self, start_path: &str) -> Result<NavigationSession> {
        Ok(NavigationSession::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.descriptions),
            &self.config,
            start_path,
        )?)
    }
}
