// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook event payload.
//!
//! The host sends one JSON object per invocation:
//!
//! ```text
//! {"tool_name": "Write", "tool_input": {"file_path": "/repo/app.py", ...}, ...}
//! ```
//!
//! Unknown fields are ignored. A known field with the wrong JSON type is
//! treated as absent, so a strange payload leads to a silent skip rather
//! than a parse failure.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use crate::config::FILE_TOOLS;
use crate::error::{Error, Result};

/// A post-tool-use event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HookEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub tool_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tool_input: Option<ToolInput>,
}

/// The subset of `tool_input` this hook reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToolInput {
    #[serde(default, deserialize_with = "lenient")]
    pub file_path: Option<String>,
}

impl HookEvent {
    /// Decode a raw payload. Anything other than a JSON object is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).map_err(Error::Payload)?;
        if !value.is_object() {
            return Err(Error::Payload(serde_json::Error::custom(
                "hook payload must be a JSON object",
            )));
        }
        serde_json::from_value(value).map_err(Error::Payload)
    }

    /// Path of the file written by a file-creating or file-editing tool.
    ///
    /// Returns `None` for other tools and for missing or empty paths.
    pub fn file_path(&self) -> Option<&str> {
        let tool = self.tool_name.as_deref()?;
        if !FILE_TOOLS.contains(&tool) {
            return None;
        }
        self.tool_input
            .as_ref()?
            .file_path
            .as_deref()
            .filter(|path| !path.is_empty())
    }
}

/// Deserialize `T`, mapping a type mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
