//! log10check CLI
//!
//! Runs the log10 conformance table against an implementation and exits
//! non-zero on the first (or any, with `--collect-all`) discrepancy.

use anyhow::{Context, Result};
use clap::Parser;
use log10check::cli::{self, Cli};
use log10check::prelude::ConformanceReport;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match try_main(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every check passed.
fn try_main(cli: &Cli) -> Result<bool> {
    let reports = cli::run(cli).context("invalid run configuration")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&reports).context("failed to serialize reports")?;
        println!("{json}");
    } else {
        for report in &reports {
            println!("{report}");
        }
    }

    Ok(reports.iter().all(ConformanceReport::is_success))
}
