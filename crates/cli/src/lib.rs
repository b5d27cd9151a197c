// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Post-write lint hook.
//!
//! Runs an external linter (ruff by default) on Python files written or
//! edited by a host tool, records the result in an append-only log, and
//! surfaces linter findings on stderr. It never fails its host.

pub mod cli;
pub mod config;
pub mod duration;
pub mod env;
pub mod error;
pub mod event;
pub mod hook;
pub mod lint;
pub mod log;

pub use cli::Cli;
pub use config::HookConfig;
pub use error::{Error, Result};
pub use event::{HookEvent, ToolInput};
pub use hook::{Outcome, handle};
pub use lint::{LintResult, Linter};
pub use log::HookLog;

#[cfg(test)]
pub mod test_utils;
