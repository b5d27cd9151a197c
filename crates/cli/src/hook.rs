// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint hook runner.
//!
//! One linear pass per invocation:
//!
//! 1. blank stdin: nothing to do
//! 2. decode the event (failure is logged)
//! 3. keep only `Write`/`Edit` events on `.py` files (silent otherwise)
//! 4. missing file is logged
//! 5. run the linter and log whether it passed
//! 6. on issues, echo the linter's stdout to stderr for the host to show
//!
//! [`handle`] never fails. Every error is logged and dropped, and the
//! binary exits 0 whatever happens here.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::{HookConfig, SOURCE_SUFFIX};
use crate::error::{Error, Result};
use crate::event::HookEvent;
use crate::lint::{LintResult, Linter};
use crate::log::HookLog;

/// Upper bound on the stdin payload.
pub const MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// What a successful pass decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to lint. Not logged.
    Skipped,
    /// Linter exited 0.
    Passed { path: PathBuf },
    /// Linter exited non-zero.
    Issues { path: PathBuf, result: LintResult },
}

/// Read the event from `input`, lint, log, and write any advisory to
/// `advisory`.
pub fn handle<R: Read, W: Write>(input: R, config: &HookConfig, advisory: &mut W) {
    let log = HookLog::new(config.log_path());
    let linter = Linter::from_config(config);

    let result = read_payload(input).and_then(|raw| run(&raw, &linter));
    match result {
        Ok(Outcome::Skipped) => {}
        Ok(Outcome::Passed { path }) => {
            log.record(&format!("{} check passed: {}", linter.name(), path.display()));
        }
        Ok(Outcome::Issues { path, result }) => {
            log.record(&format!(
                "{} check issues in {}:\n{}\n{}",
                linter.name(),
                path.display(),
                result.stdout,
                result.stderr
            ));
            if let Err(e) = writeln!(advisory, "{}", result.stdout) {
                tracing::warn!("could not write advisory: {e}");
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "hook did not complete");
            log.record(&e.log_message());
        }
    }
}

/// Decide and lint for one raw payload.
pub fn run(raw: &str, linter: &Linter) -> Result<Outcome> {
    if raw.trim().is_empty() {
        return Ok(Outcome::Skipped);
    }

    let event = HookEvent::parse(raw)?;
    let Some(path) = event.file_path().filter(|p| p.ends_with(SOURCE_SUFFIX)) else {
        return Ok(Outcome::Skipped);
    };

    let path = Path::new(path);
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!("running {} check on {}", linter.name(), path.display());
    let result = linter.check(path)?;
    let path = path.to_path_buf();
    if result.passed() {
        Ok(Outcome::Passed { path })
    } else {
        Ok(Outcome::Issues { path, result })
    }
}

fn read_payload<R: Read>(input: R) -> Result<String> {
    let mut raw = String::new();
    input
        .take(MAX_INPUT_BYTES)
        .read_to_string(&mut raw)
        .map_err(|e| Error::io("reading stdin", e))?;
    Ok(raw)
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
