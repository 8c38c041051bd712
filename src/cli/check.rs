//! Check command: run the audit engine and render the result.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use console::style;

use gilt::engine::CheckEngine;
use gilt::reporters::{human, json, OutputFormat};

pub fn run(
    path: &Path,
    category: Option<String>,
    as_json: bool,
    as_agent: bool,
    verbose: bool,
) -> Result<ExitCode> {
    let format = if as_json {
        OutputFormat::Json
    } else if as_agent {
        OutputFormat::Agent
    } else {
        OutputFormat::Human
    };

    let engine = CheckEngine::new(path, category);
    let result = match engine.run() {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{} {err}", style("❌").red());
            // Machine consumers still get JSON on stdout.
            if matches!(format, OutputFormat::Json | OutputFormat::Agent) {
                println!("{}", json::render_error(&err.to_string()));
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let rendered = if verbose && format == OutputFormat::Human {
        human::render_verbose(&result)?
    } else {
        gilt::reporters::render(&result, format)?
    };
    println!("{rendered}");

    if result.passed {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
