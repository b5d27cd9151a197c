// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

/// (name, doc) for every variable the binary reads.
const VARS: &[(&str, &str)] = &[
    (
        "CLAUDE_PROJECT_DIR",
        "project root set by the host; logs are written beneath it.",
    ),
    ("RUFF_VALIDATOR_LINTER", "overrides the linter program."),
    ("RUFF_VALIDATOR_TIMEOUT", "overrides the linter time limit."),
    ("RUFF_VALIDATOR_LOG", "configures tracing log filter."),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let contents: String = VARS
        .iter()
        .map(|(name, doc)| {
            format!("/// Environment variable: {doc}\npub const {name}: &str = \"{name}\";\n")
        })
        .collect();

    fs::write(dest, contents).expect("failed to write env_names.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
