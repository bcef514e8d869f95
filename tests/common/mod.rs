//! Shared testing utilities for formlink CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `formlink` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("formlink").expect("Failed to locate formlink binary");
        cmd.current_dir(self.work_dir()).env_remove("FORMLINK_BASE_URL").env_remove("FORMLINK_LOG");
        cmd
    }

    /// Path to the default sheet file.
    pub fn sheet_path(&self) -> PathBuf {
        self.work_dir().join("sheet.csv")
    }

    /// Write a file relative to the working directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read the default sheet, or an empty string when it does not exist.
    pub fn read_sheet(&self) -> String {
        fs::read_to_string(self.sheet_path()).unwrap_or_default()
    }
}
