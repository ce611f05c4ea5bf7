//! [`TestDir`] for tests that read configuration or catalogs from disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helpers for writing fixture files.
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestDir::new: failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` under the root and return the full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestDir::write: failed to write {}: {}", name, e));
        path
    }
}
