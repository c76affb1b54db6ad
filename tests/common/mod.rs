#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the commit-guard binary.
#[macro_export]
macro_rules! commit_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("commit-guard"))
    };
}

pub const BASIC_CONFIG: &str = r#"
[github]
token = "ghp_test"

[status]
context = "commit-guard/rules"

[rule.no-wip]
text = "Work in progress commits are not allowed."
type = "message"
match = "plain:wip"

[rule.keep-readme]
text = "Do not delete the README."
type = "path"
match = "regex:^readme"
status = "removed"

[rule.small-commits]
text = "Commit is too large."
type = "stats"
stat = "total"
scope = "commit"
max = 500
"#;

/// Temporary working directory with its own config home, so no user
/// configuration leaks into a test.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `.commit-guard.toml` into the working directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".commit-guard.toml", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command running inside the fixture with an isolated config home.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = commit_guard!();
        let home = self.dir.path().join("home");
        cmd.current_dir(self.dir.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1");
        cmd
    }
}
