//! Common test utilities for unitgen integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
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

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Parse YAML text into a generic value
#[allow(dead_code)]
pub fn parse_yaml(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).expect("Failed to parse YAML")
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn unitgen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("unitgen").expect("Failed to find unitgen binary");
    cmd.env_remove("UNITGEN_WORKSPACE")
        .env_remove("UNITGEN_UNITS")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unitgen command running inside `workspace`
pub fn unitgen_cmd_for_workspace(workspace: &std::path::Path) -> Command {
    let mut cmd = unitgen_cmd();
    cmd.current_dir(workspace);
    cmd
}
