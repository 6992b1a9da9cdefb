//! Shared testing utilities for gottcha-nf CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gottcha-nf").expect("Failed to locate gottcha-nf binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("GOTTCHA_NF_CONFIG")
            .env_remove("RUST_LOG")
            .env_remove("LABKEY_TOKEN");
        cmd
    }

    /// Create an empty file relative to the root and return its absolute path.
    pub fn touch(&self, relative: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, b"").expect("Failed to create file");
        path
    }

    /// Create a directory relative to the root and return its absolute path.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Write a file relative to the root and return its absolute path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write `.gottcha-nf.toml` in the work directory.
    pub fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join(".gottcha-nf.toml"), content)
            .expect("Failed to write settings");
    }
}
