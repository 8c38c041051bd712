//! Reserve command: secure a package name on PyPI.

use std::process::ExitCode;

use anyhow::Result;
use console::style;
use serde_json::json;

use gilt::config::UserConfig;
use gilt::registry::{credentials, reserve};

pub fn run(
    name: &str,
    author: Option<String>,
    email: Option<String>,
    dry_run: bool,
    as_json: bool,
) -> Result<ExitCode> {
    let config = UserConfig::load();
    let author = author
        .or_else(|| config.author.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let email = email
        .or_else(|| config.author.email.clone())
        .unwrap_or_default();

    let token = if dry_run {
        credentials::get_token(&config).unwrap_or_default()
    } else {
        match credentials::resolve_token(&config, !as_json) {
            Ok(token) => token,
            Err(err) => {
                if as_json {
                    println!("{}", json!({ "error": err.to_string() }));
                } else {
                    eprintln!("{} {err:#}", style("❌").red());
                }
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let result = reserve::reserve(name, &author, &email, &token, dry_run);

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "success": result.success,
                "package_name": result.package_name,
                "version": result.version,
                "message": result.message,
            }))?
        );
        return Ok(if result.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if result.success {
        println!("{} {}", style("✅").green(), result.message);
        println!("   View at: https://pypi.org/project/{name}/");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{} {}", style("❌").red(), result.message);
        Ok(ExitCode::FAILURE)
    }
}
