//! gilt - project governance CLI
//!
//! Audits Python projects against a fixed gold-standard rule catalog,
//! scaffolds compliant projects from embedded templates, and reserves
//! package names on PyPI.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // RUST_LOG wins; --log-level is the fallback default.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", style("❌").red());
            ExitCode::FAILURE
        }
    }
}
