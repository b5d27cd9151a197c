// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a scratch project with a stub linter and a fluent builder for
//! running the ruff-validator binary against it.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a Command configured to run the ruff-validator binary with a
/// clean environment for the variables it reads.
pub fn validator_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("ruff-validator"));
    for var in [
        "CLAUDE_PROJECT_DIR",
        "RUFF_VALIDATOR_LINTER",
        "RUFF_VALIDATOR_TIMEOUT",
        "RUFF_VALIDATOR_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A scratch project directory used as `CLAUDE_PROJECT_DIR`.
pub struct Project {
    dir: TempDir,
    linter: Option<String>,
    timeout: Option<String>,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            linter: None,
            timeout: None,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the project root and returns its path.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Installs a stub linter script that records its arguments in
    /// `<project>/linter-calls` and then runs `body`.
    #[cfg(unix)]
    pub fn stub_linter(mut self, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = self.path().join("bin/ruff");
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        let calls = self.path().join("linter-calls");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$@\" >> '{}'\n{body}\n",
                calls.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        self.linter = Some(script.to_string_lossy().into_owned());
        self
    }

    /// Points the validator at a linter program that does not exist.
    pub fn missing_linter(mut self) -> Self {
        self.linter = Some("ruff-validator-missing-linter".to_string());
        self
    }

    pub fn timeout(mut self, timeout: &str) -> Self {
        self.timeout = Some(timeout.to_string());
        self
    }

    /// Runs the validator with `stdin` as the hook payload.
    pub fn run(&self, stdin: impl Into<Vec<u8>>) -> assert_cmd::assert::Assert {
        self.run_with_args(&[], stdin)
    }

    /// Runs the validator with extra command-line arguments.
    pub fn run_with_args(
        &self,
        args: &[&str],
        stdin: impl Into<Vec<u8>>,
    ) -> assert_cmd::assert::Assert {
        let mut cmd = validator_cmd();
        cmd.args(args);
        cmd.current_dir(self.path())
            .env("CLAUDE_PROJECT_DIR", self.path());
        if let Some(linter) = &self.linter {
            cmd.env("RUFF_VALIDATOR_LINTER", linter);
        }
        if let Some(timeout) = &self.timeout {
            cmd.env("RUFF_VALIDATOR_TIMEOUT", timeout);
        }
        cmd.write_stdin(stdin).assert()
    }

    /// Contents of the validator log, empty when nothing was logged.
    pub fn log(&self) -> String {
        fs::read_to_string(self.path().join("logs/ruff_validator.log")).unwrap_or_default()
    }

    /// Arguments of every stub linter invocation, one per line.
    pub fn linter_calls(&self) -> String {
        fs::read_to_string(self.path().join("linter-calls")).unwrap_or_default()
    }
}

/// A `{"tool_name": .., "tool_input": {"file_path": ..}}` payload.
pub fn event(tool: &str, file_path: &Path) -> String {
    serde_json::json!({
        "tool_name": tool,
        "tool_input": { "file_path": file_path },
    })
    .to_string()
}
