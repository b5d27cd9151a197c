// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration for a single hook invocation.

use std::path::PathBuf;
use std::time::Duration;

/// Linter program invoked when none is configured.
pub const DEFAULT_LINTER: &str = "ruff";

/// Default linter time limit.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Directory under the project root that receives the log file.
pub const LOG_DIR_NAME: &str = "logs";

/// Name of the append-only log file.
pub const LOG_FILE_NAME: &str = "ruff_validator.log";

/// Only files with this suffix are linted.
pub const SOURCE_SUFFIX: &str = ".py";

/// Tool names that create or modify a file.
pub const FILE_TOOLS: &[&str] = &["Write", "Edit"];

/// Everything the runner needs, resolved once at the binary boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Project root; logs go to `<project_dir>/logs`.
    pub project_dir: PathBuf,
    /// Linter program, looked up on `PATH` when not a path.
    pub linter: String,
    /// Time limit for one linter run.
    pub timeout: Duration,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            linter: DEFAULT_LINTER.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HookConfig {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_linter(mut self, linter: impl Into<String>) -> Self {
        self.linter = linter.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn log_dir(&self) -> PathBuf {
        self.project_dir.join(LOG_DIR_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir().join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
