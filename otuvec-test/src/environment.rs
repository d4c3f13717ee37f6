//! Test environment management
//!
//! Provides isolated temporary directories with automatic cleanup using RAII.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment, removed when dropped
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix("otuvec-test-")
            .tempdir()
            .context("Failed to create test directory")?;
        Ok(Self { temp_dir })
    }

    /// Path to the environment root
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `contents` to `name` under the root and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn read_file(&self, name: &str) -> Result<String> {
        let path = self.root().join(name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() {
        let root = {
            let env = TestEnvironment::new().unwrap();
            let path = env.write_file("list.txt", "0.03 1 a\n").unwrap();
            assert!(path.exists());
            assert_eq!(env.read_file("list.txt").unwrap(), "0.03 1 a\n");
            env.root().to_path_buf()
        };
        assert!(!root.exists());
    }
}
