//! Shared testing harness for `m3u-compose` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Command for the binary, run inside the work directory with logging
    /// settings from the outer environment removed.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("m3u-compose").expect("Failed to find binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("M3U_COMPOSE_LOG")
            .env_remove("RUST_LOG")
            .env_remove("M3U_COMPOSE_RELEASE_BASE_URL");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub(crate) fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// Stdout of a successful invocation.
    pub(crate) fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.cli().args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("stdout is not UTF-8")
    }
}
