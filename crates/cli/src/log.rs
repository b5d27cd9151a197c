// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only validator log.
//!
//! Each record is one `[timestamp] message` entry. The file is opened,
//! appended and closed per record so concurrent hook processes only ever
//! interleave whole records.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Error, Result};

/// ISO-8601 local time with microseconds and no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Clone)]
pub struct HookLog {
    path: PathBuf,
}

impl HookLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record, creating the log directory first.
    pub fn append(&self, message: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| Error::io(format!("creating {}", dir.display()), e))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(format!("opening {}", self.path.display()), e))?;
        file.write_all(format_record(Local::now(), message).as_bytes())
            .map_err(|e| Error::io(format!("writing {}", self.path.display()), e))
    }

    /// Append a record; a failure to write is only traced.
    pub fn record(&self, message: &str) {
        tracing::debug!(log = %self.path.display(), "{message}");
        if let Err(e) = self.append(message) {
            tracing::warn!("could not write validator log: {e}");
        }
    }
}

pub(crate) fn format_record(at: DateTime<Local>, message: &str) -> String {
    format!("[{}] {}\n", at.format(TIMESTAMP_FORMAT), message)
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
