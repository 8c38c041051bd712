//! Init command: scaffold a gold-standard project.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use console::style;
use serde_json::json;

use gilt::config::UserConfig;
use gilt::registry::pypi::{check_availability, Availability};
use gilt::scaffold::{scaffold, ScaffoldOptions};

pub struct InitArgs {
    pub path: PathBuf,
    pub name: Option<String>,
    pub org: Option<String>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub license: String,
    pub description: String,
    pub check_pypi: bool,
    pub json: bool,
}

pub fn run(args: InitArgs) -> Result<ExitCode> {
    let target = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()?.join(&args.path)
    };

    let project_name = match &args.name {
        Some(name) => name.clone(),
        None => target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string()),
    };

    // CLI flags win; the user config fills the gaps.
    let config = UserConfig::load();
    let org = args.org.or(config.author.org);
    let author = args.author.or(config.author.name);
    let email = args.email.or(config.author.email);
    let (Some(org), Some(author), Some(email)) = (org, author, email) else {
        let message =
            "org, author, and email are required (pass flags or set [author] in the gilt config)";
        if args.json {
            println!("{}", json!({ "error": message }));
        } else {
            eprintln!("{} {message}", style("❌").red());
        }
        return Ok(ExitCode::FAILURE);
    };

    if args.check_pypi {
        match check_availability(&project_name) {
            Availability::Taken => {
                let message = format!("Package name '{project_name}' is already taken on PyPI");
                if args.json {
                    println!("{}", json!({ "error": message }));
                } else {
                    eprintln!("{} {message}", style("❌").red());
                }
                return Ok(ExitCode::FAILURE);
            }
            Availability::Error if !args.json => {
                eprintln!("{} Could not verify PyPI availability", style("⚠️").yellow());
            }
            _ => {}
        }
    }

    let description = if args.description.is_empty() {
        "A modern Python package".to_string()
    } else {
        args.description.clone()
    };
    std::fs::create_dir_all(&target)?;
    let result = scaffold(
        &target,
        &ScaffoldOptions {
            name: project_name.clone(),
            description,
            org,
            author,
            email,
            license: args.license.clone(),
            quiet: args.json,
        },
    );

    if args.json {
        println!(
            "{}",
            json!({
                "success": result.success,
                "path": result.path.display().to_string(),
                "message": result.message,
                "files": result.files_created,
            })
        );
        return Ok(if result.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if result.success {
        println!(
            "{} Project '{}' created at {}",
            style("✅").green(),
            style(&project_name).bold(),
            result.path.display()
        );
        for file in &result.files_created {
            println!("   📄 {file}");
        }
        println!("\nNext: cd in, run `make install`, then `gilt check .`");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{} {}", style("❌").red(), result.message);
        Ok(ExitCode::FAILURE)
    }
}
