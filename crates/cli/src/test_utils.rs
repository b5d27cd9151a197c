// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides scratch projects and stub linters for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::HookConfig;

/// Creates an empty temp project directory.
pub fn temp_project() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Writes an executable `sh` script standing in for the linter.
///
/// The script receives the same arguments the real linter would
/// (`check <path>`).
#[cfg(unix)]
pub fn stub_linter(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("stub-ruff");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Config rooted at `project` using the given linter program.
pub fn config_for(project: &Path, linter: &Path) -> HookConfig {
    HookConfig::new(project).with_linter(linter.to_string_lossy())
}

/// Log file contents, or an empty string when nothing was logged.
pub fn read_log(config: &HookConfig) -> String {
    fs::read_to_string(config.log_path()).unwrap_or_default()
}
