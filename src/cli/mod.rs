//! CLI command definitions and handlers.

mod check;
mod init;
mod reserve;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// gilt - project governance CLI
///
/// Audits Python projects against a fixed gold-standard rule catalog,
/// scaffolds compliant projects, and reserves package names on PyPI.
#[derive(Parser, Debug)]
#[command(name = "gilt")]
#[command(
    version,
    about = "Project governance CLI — audit against the gold standard, scaffold compliant projects, reserve PyPI names",
    after_help = "\
Examples:
  gilt check .                         Audit the current directory
  gilt check . --category ci           Audit only the CI category
  gilt check . --json                  JSON output for CI gating
  gilt check . --agent                 Compact digest for automated callers
  gilt init my-project --org acme      Scaffold a gold-standard project
  gilt reserve my-package --dry-run    Check and simulate a PyPI reservation

Documentation: https://github.com/gilt-dev/gilt"
)]
pub struct Cli {
    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a project against the gold-standard catalog
    #[command(after_help = "\
Exit status is 0 only when every executed check passes (score 100).

Examples:
  gilt check                           Audit the current directory
  gilt check /path/to/project          Audit a specific project
  gilt check . --category pyproject    Restrict execution and scoring to one category
  gilt check . --json | jq .score      Machine-readable score")]
    Check {
        /// Path to the project root (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Restrict the audit to one category
        #[arg(long)]
        category: Option<String>,

        /// Emit the full result as JSON
        #[arg(long, conflicts_with = "agent")]
        json: bool,

        /// Emit the compact agent digest
        #[arg(long, conflicts_with = "json")]
        agent: bool,

        /// List every individual check in the human report
        #[arg(long, short = 'v', conflicts_with_all = ["json", "agent"])]
        verbose: bool,
    },

    /// Scaffold a new gold-standard Python project
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Project name (defaults to the directory name)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// GitHub org or username (defaults from user config)
        #[arg(long)]
        org: Option<String>,

        /// Author name (defaults from user config)
        #[arg(long, short = 'a')]
        author: Option<String>,

        /// Author email (defaults from user config)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// License identifier
        #[arg(long, default_value = "MIT")]
        license: String,

        /// Project description
        #[arg(long, short = 'd', default_value = "")]
        description: String,

        /// Abort when the name is already taken on PyPI
        #[arg(long)]
        check_pypi: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reserve a package name on PyPI with a placeholder release
    Reserve {
        /// Package name to reserve
        name: String,

        /// Author name (defaults from user config)
        #[arg(long, short = 'a')]
        author: Option<String>,

        /// Author email (defaults from user config)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Check availability and stop before publishing
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Check {
            path,
            category,
            json,
            agent,
            verbose,
        } => check::run(&path, category, json, agent, verbose),

        Commands::Init {
            path,
            name,
            org,
            author,
            email,
            license,
            description,
            check_pypi,
            json,
        } => init::run(init::InitArgs {
            path,
            name,
            org,
            author,
            email,
            license,
            description,
            check_pypi,
            json,
        }),

        Commands::Reserve {
            name,
            author,
            email,
            dry_run,
            json,
        } => reserve::run(&name, author, email, dry_run, json),

        Commands::Version => {
            println!("gilt {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}
