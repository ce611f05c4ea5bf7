//! Error types for leatherman-nav

use std::path::PathBuf;

/// Result type for leatherman-nav operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a catalog or loading configuration.
///
/// Navigation, breadcrumb and search operations never fail; an unknown path
/// is reported as an absence, not as one of these variants.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two tools in the catalog share the same route
    #[error("Duplicate tool path {path} (in '{first}' and '{second}')")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// A tool id appears twice within one category
    #[error("Duplicate tool id '{id}' in category '{category}'")]
    DuplicateItemId { category: String, id: String },

    /// Two categories share the same id
    #[error("Duplicate category id '{id}'")]
    DuplicateCategory { id: String },

    /// The items of a sub-group are not adjacent in their category
    #[error("Sub-group '{sub_group}' in category '{category}' is split by other items")]
    SplitSubGroup { category: String, sub_group: String },

    /// A category id or sub-group key contains the node id separator
    #[error("Invalid {kind} '{value}': must not contain '--'")]
    ReservedSeparator { kind: &'static str, value: String },

    /// Routes must be absolute
    #[error("Invalid route path '{path}': must start with '/'")]
    InvalidPath { path: String },

    /// Configuration is structurally valid TOML but semantically wrong
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error with the given message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
