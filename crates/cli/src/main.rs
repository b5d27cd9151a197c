// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ruff validator entry point.
//!
//! Exits 0 on every path so the host is never blocked.

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, fmt};

use ruff_validator::HookLog;
use ruff_validator::cli::{Cli, argument_error, fallback_config};
use ruff_validator::env::names;

fn init_logging() {
    let filter = EnvFilter::try_from_env(names::RUFF_VALIDATOR_LOG)
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        tracing::error!("ruff-validator: {e:#}");
    }

    std::process::exit(0);
}

fn run() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        // Stderr belongs to lint findings; bad flags or env overrides go to the log.
        Err(e) => {
            let log = HookLog::new(fallback_config().log_path());
            log.record(&argument_error(&e).log_message());
            return Ok(());
        }
    };

    ruff_validator::handle(std::io::stdin().lock(), &cli.config(), &mut std::io::stderr());
    Ok(())
}
