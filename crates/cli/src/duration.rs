// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings for the linter time limit.
//!
//! Accepted forms: `30s`, `1.5s`, `500ms`, `1m`.

use std::time::Duration;

/// Parse a duration string into a Duration.
///
/// Used as a clap `value_parser`, so errors are plain strings.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // "ms" before "s" and "m"
    if let Some(ms) = s.strip_suffix("ms") {
        return parse_whole(ms, s).map(Duration::from_millis);
    }
    if let Some(mins) = s.strip_suffix('m') {
        return parse_whole(mins, s).map(|n| Duration::from_secs(n.saturating_mul(60)));
    }
    if let Some(secs) = s.strip_suffix('s') {
        let n: f64 = secs
            .trim()
            .parse()
            .map_err(|_| format!("invalid duration: {s}"))?;
        return Duration::try_from_secs_f64(n).map_err(|_| format!("invalid duration: {s}"));
    }

    Err(format!(
        "invalid duration format: {s} (use 30s, 500ms, or 1m)"
    ))
}

fn parse_whole(number: &str, original: &str) -> Result<u64, String> {
    number
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration: {original}"))
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
