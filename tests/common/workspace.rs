//! Temporary working directory for driving the binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use home_ci_reporter::config::STEP_SUMMARY_ENV;
use home_ci_reporter::{Report, ReportStore};
use tempfile::TempDir;

pub struct TestWorkspace {
    /// TempDir handle (keeps directory alive until dropped)
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Binary invocation with a controlled environment.
    ///
    /// The step summary variable is cleared so output lands on stdout unless
    /// a test opts in with [`TestWorkspace::cmd_with_step_summary`].
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("home-ci-reporter").expect("binary should build");
        cmd.current_dir(self.path())
            .env_remove(STEP_SUMMARY_ENV)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn cmd_with_step_summary(&self, summary: &Path) -> Command {
        let mut cmd = self.cmd();
        cmd.env(STEP_SUMMARY_ENV, summary);
        cmd
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.join(rel)).expect("Failed to read file")
    }

    pub fn load_report(&self, rel: &str) -> Report {
        ReportStore::load(&self.join(rel)).expect("report should load")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
