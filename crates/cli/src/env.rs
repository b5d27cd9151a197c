// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by the binary.
//!
//! Only the argument layer in [`crate::cli`] consults these; everything
//! below it receives an explicit [`crate::config::HookConfig`].

pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
