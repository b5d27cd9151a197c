// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linter subprocess.
//!
//! Runs `<linter> check <path>` with captured output and a hard time limit.

use std::io::{self, ErrorKind, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::config::HookConfig;
use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Captured outcome of one linter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    /// Exit code; `None` when the linter was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl LintResult {
    pub fn passed(&self) -> bool {
        self.code == Some(0)
    }
}

/// External linter invocation.
#[derive(Debug, Clone)]
pub struct Linter {
    program: String,
    name: String,
    timeout: Duration,
}

impl Linter {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        let program = program.into();
        let name = Path::new(&program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&program)
            .to_string();
        Self {
            program,
            name,
            timeout,
        }
    }

    pub fn from_config(config: &HookConfig) -> Self {
        Self::new(config.linter.clone(), config.timeout)
    }

    /// Short name used in messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `check` against `path`.
    pub fn check(&self, path: &Path) -> Result<LintResult> {
        let child = Command::new(&self.program)
            .arg("check")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::LinterNotFound {
                    linter: self.name.clone(),
                },
                _ => Error::io(format!("spawning {}", self.program), e),
            })?;

        match run_with_timeout(child, self.timeout) {
            Ok((status, stdout, stderr)) => Ok(LintResult {
                code: status.code(),
                stdout: String::from_utf8_lossy(&stdout).into_owned(),
                stderr: String::from_utf8_lossy(&stderr).into_owned(),
            }),
            Err(e) if e.kind() == ErrorKind::TimedOut => Err(Error::Timeout {
                linter: self.name.clone(),
                timeout: self.timeout,
            }),
            Err(e) => Err(Error::io(format!("waiting for {}", self.program), e)),
        }
    }
}

/// Wait for `child` to exit and its output to drain, all within `timeout`.
///
/// Both pipes are read on helper threads while waiting so a linter that
/// writes more than a pipe buffer of output cannot stall. The deadline also
/// covers the drain: a background grandchild holding the pipes open counts
/// against the same limit.
fn run_with_timeout(
    mut child: Child,
    timeout: Duration,
) -> io::Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
    let deadline = Instant::now() + timeout;
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                abandon(&mut child);
                return Err(timed_out(timeout));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                abandon(&mut child);
                return Err(e);
            }
        }
    };

    // Readers still blocked at the deadline are left detached.
    let stdout = collect(&stdout, deadline).ok_or_else(|| timed_out(timeout))?;
    let stderr = collect(&stderr, deadline).ok_or_else(|| timed_out(timeout))?;
    Ok((status, stdout, stderr))
}

/// Kill and reap a child we are giving up on.
fn abandon(child: &mut Child) {
    child.kill().ok();
    child.wait().ok();
}

fn timed_out(timeout: Duration) -> io::Error {
    io::Error::new(
        ErrorKind::TimedOut,
        format!("command timed out after {timeout:?}"),
    )
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<Vec<u8>> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    match pipe {
        Some(mut pipe) => {
            thread::spawn(move || {
                let mut buf = Vec::new();
                pipe.read_to_end(&mut buf).ok();
                tx.send(buf).ok();
            });
        }
        None => {
            tx.send(Vec::new()).ok();
        }
    }
    rx
}

/// Output of one reader, or `None` if it is still blocked at `deadline`.
fn collect(rx: &Receiver<Vec<u8>>, deadline: Instant) -> Option<Vec<u8>> {
    match rx.recv_deadline(deadline) {
        Ok(buf) => Some(buf),
        Err(RecvTimeoutError::Disconnected) => Some(Vec::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
