// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use std::time::Duration;

/// Ruff validator error types.
///
/// Every variant is absorbed by [`crate::hook::handle`]; none of them
/// reach the process exit code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Stdin was not a JSON object
    #[error("malformed hook payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// The edited file no longer exists
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The linter program could not be spawned because it does not exist
    #[error("linter not found: {linter}")]
    LinterNotFound { linter: String },

    /// The linter ran past its time limit and was killed
    #[error("{linter} timed out after {timeout:?}")]
    Timeout { linter: String, timeout: Duration },

    /// Flags or env overrides that did not parse
    #[error("argument error: {0}")]
    Argument(String),

    /// Any other I/O failure
    #[error("io error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using ruff validator Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// The line recorded in the validator log for this failure.
    pub fn log_message(&self) -> String {
        match self {
            Error::Payload(_) => "Failed to parse hook JSON from stdin".to_string(),
            Error::FileNotFound { path } => format!("File not found: {}", path.display()),
            Error::LinterNotFound { linter } => {
                format!("{linter} not found in PATH - skipping check")
            }
            Error::Timeout { linter, .. } => format!("{linter} check timed out"),
            Error::Argument(_) | Error::Io { .. } => format!("Unexpected error: {self}"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
