#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated environment for one CLI test: its own notes and config
/// directories, wired up through the ANOTIS_* environment variables.
pub struct TestEnv {
    temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        TestEnv {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.temp.path().join("notes")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp.path().join("config")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("anotis").unwrap();
        cmd.env_remove("EDITOR");
        cmd.env_remove("VISUAL");
        cmd.env("ANOTIS_NOTES_DIR", self.notes_dir());
        cmd.env("ANOTIS_CONFIG_DIR", self.config_dir());
        cmd
    }
}
