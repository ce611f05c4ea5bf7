//! Dashboard configuration parsed from `leatherman.toml`
//!
//! Only routing concerns live here: which non-catalog routes exist and where
//! unmatched paths land. The catalog itself is compiled in (or loaded
//! separately with [`crate::Registry::load`]).

use crate::breadcrumb::HOME_LABEL;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "leatherman.toml";

fn default_true() -> bool {
    true
}

fn default_home_label() -> String {
    HOME_LABEL.to_string()
}

fn default_special_routes() -> Vec<SpecialRoute> {
    vec![SpecialRoute {
        path: "/settings".to_string(),
        label: "Settings".to_string(),
        show_sidebar: false,
    }]
}

/// A route outside the catalog, such as the settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRoute {
    /// Absolute route path
    pub path: String,
    /// Breadcrumb label
    pub label: String,
    /// Whether the sidebar is rendered on this route
    #[serde(default = "default_true")]
    pub show_sidebar: bool,
}

/// `[routes]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesSection {
    /// Where unmatched paths (and the root) land; defaults to the first tool
    #[serde(default)]
    pub default: Option<String>,

    /// Breadcrumb label for the application root
    #[serde(default = "default_home_label")]
    pub home_label: String,

    /// Non-catalog routes known to the application
    #[serde(default = "default_special_routes")]
    pub special: Vec<SpecialRoute>,
}

impl Default for RoutesSection {
    fn default() -> Self {
        Self {
            default: None,
            home_label: default_home_label(),
            special: default_special_routes(),
        }
    }
}

/// Parsed dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub routes: RoutesSection,
}

impl Config {
    /// Parse configuration from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use leatherman_nav::Config;
    ///
    /// let config = Config::parse(r#"
    /// [routes]
    /// default = "/tools/json/format"
    ///
    /// [[routes.special]]
    /// path = "/about"
    /// label = "About"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.routes.default.as_deref(), Some("/tools/json/format"));
    /// assert!(config.routes.special[0].show_sidebar);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(&self) -> Result<()> {
        let paths = self
            .routes
            .special
            .iter()
            .map(|r| r.path.as_str())
            .chain(self.routes.default.as_deref());
        for path in paths {
            if !path.starts_with('/') {
                return Err(Error::InvalidPath {
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.routes.default, None);
        assert_eq!(config.routes.home_label, "Home");
        assert_eq!(config.routes.special.len(), 1);
        assert_eq!(config.routes.special[0].path, "/settings");
        assert!(!config.routes.special[0].show_sidebar);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_special_routes_replace_defaults() {
        let config = Config::parse(
            r#"
            [[routes.special]]
            path = "/about"
            label = "About"
            "#,
        )
        .unwrap();
        assert_eq!(config.routes.special.len(), 1);
        assert_eq!(config.routes.special[0].label, "About");
    }

    #[test]
    fn test_relative_default_rejected() {
        let err = Config::parse("[routes]\ndefault = \"tools/json/format\"").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/definitely/not/here.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
