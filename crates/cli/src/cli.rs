// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! This is the only layer that reads the environment; it resolves
//! everything into a [`HookConfig`].

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{DEFAULT_LINTER, HookConfig};
use crate::duration::parse_duration;
use crate::env::names;
use crate::error::Error;

/// Post-write hook that runs ruff on edited Python files.
///
/// Reads a tool-use event as JSON on stdin. Always exits 0.
#[derive(Parser, Debug)]
#[command(name = "ruff-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root; the log is written to <DIR>/logs/ruff_validator.log
    #[arg(long, value_name = "DIR", env = names::CLAUDE_PROJECT_DIR)]
    pub project_dir: Option<PathBuf>,

    /// Linter program to invoke as `<LINTER> check <path>`
    #[arg(long, value_name = "LINTER", env = names::RUFF_VALIDATOR_LINTER, default_value = DEFAULT_LINTER)]
    pub linter: String,

    /// Linter time limit (e.g. 30s, 500ms, 1m)
    #[arg(
        long,
        value_name = "DURATION",
        env = names::RUFF_VALIDATOR_TIMEOUT,
        default_value = "30s",
        value_parser = parse_duration
    )]
    pub timeout: Duration,
}

impl Cli {
    pub fn config(&self) -> HookConfig {
        let project_dir = self
            .project_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        HookConfig::new(project_dir)
            .with_linter(self.linter.clone())
            .with_timeout(self.timeout)
    }
}

/// Config used when the arguments themselves failed to parse.
///
/// Only the project root matters here: it locates the log that records
/// the failure.
pub fn fallback_config() -> HookConfig {
    let project_dir = std::env::var_os(names::CLAUDE_PROJECT_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    HookConfig::new(project_dir)
}

/// Convert a clap parse failure into a loggable error.
///
/// Keeps the first line of clap's message without its `error: ` prefix.
pub fn argument_error(err: &clap::Error) -> Error {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    Error::Argument(first.strip_prefix("error: ").unwrap_or(first).to_string())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
