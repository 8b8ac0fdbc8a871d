//! Shared testing harness for `genconf` integration tests.

use assert_cmd::Command;
use genconf::ConfigEnvironment;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const BOOTSTRAP_ID: &str = "0123abcd";
pub(crate) const CHANNEL_NAME: &str = "testing/continuous";

/// Testing harness providing an isolated `$HOME` and working directory.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default output root, `$HOME/dcos/serve`.
    pub(crate) fn serve_dir(&self) -> PathBuf {
        self.home().join("dcos").join("serve")
    }

    /// Write `dcos-config.yaml` into the working directory.
    pub(crate) fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("dcos-config.yaml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Read a generated file relative to the default output root.
    pub(crate) fn read_output(&self, relative: &str) -> String {
        let path = self.serve_dir().join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", path.display(), err))
    }

    /// Environment snapshot matching what `cli()` exports.
    pub(crate) fn environment(&self) -> ConfigEnvironment {
        ConfigEnvironment {
            bootstrap_id: Some(BOOTSTRAP_ID.to_string()),
            channel_name: Some(CHANNEL_NAME.to_string()),
            home: Some(self.home().to_path_buf()),
        }
    }

    /// Build a command for invoking the compiled `genconf` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("genconf").expect("Failed to locate genconf binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("DCOS_BOOTSTRAP_ID", BOOTSTRAP_ID)
            .env("DCOS_CHANNEL_NAME", CHANNEL_NAME)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Assert that nothing was written under the default output root.
    pub(crate) fn assert_nothing_generated(&self) {
        let serve = self.serve_dir();
        if serve.exists() {
            let entries = fs::read_dir(&serve).expect("Failed to list output root").count();
            assert_eq!(entries, 0, "output root should be empty");
        }
    }
}
