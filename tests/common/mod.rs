//! Common test utilities for component-bundle integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a directory (and parents) in the workspace
    #[allow(dead_code)]
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Write a file in the workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Parse a JSON file from the workspace
    #[allow(dead_code)]
    pub fn read_json(&self, path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(path)).expect("Failed to parse JSON")
    }

    /// Check if a file exists in the workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real binary, running in `cwd`
#[allow(deprecated)]
pub fn bundle_cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("component-bundle").expect("binary should be built");
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

/// Decode a base64 blob from a bundle value
#[allow(dead_code)]
pub fn decode_blob(value: &serde_json::Value) -> Vec<u8> {
    use base64::Engine as _;
    let encoded = value.as_str().expect("file entry should be a string");
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .expect("file entry should be valid base64")
}
