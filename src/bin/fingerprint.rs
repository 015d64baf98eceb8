//! Fingerprint CLI Binary
//!
//! Scans directory trees and writes a checksum manifest.

use anyhow::Context;
use clap::Parser;
use fingerprint::cli::{map_error, Cli, RunContext};
use fingerprint::logging::init_logging;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let context = match RunContext::new(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init(&cli, &context) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match context.execute(&cli.command) {
        Ok(counters) => {
            info!(
                directories = counters.directories,
                files = counters.files,
                excluded = counters.excluded,
                "Command completed successfully"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn init(cli: &Cli, context: &RunContext) -> anyhow::Result<()> {
    let logging = context.logging_config(cli);
    init_logging(&logging).context("Failed to initialize logging")?;
    Ok(())
}
