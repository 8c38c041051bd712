//! PyPI name reservation.
//!
//! Publishes a minimal placeholder package (0.0.1.dev0) to secure a name
//! before the real implementation exists. Building and publishing are
//! delegated to `uv` in a temporary directory; the token travels via the
//! `UV_PUBLISH_TOKEN` environment variable, never argv.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::pypi::{check_availability, Availability};
use crate::models::ReserveResult;

/// Placeholder version used for reservations.
pub const RESERVE_VERSION: &str = "0.0.1.dev0";

const PYPROJECT_TEMPLATE: &str = r#"[project]
name = "{name}"
version = "{version}"
description = "Package name reserved — implementation coming soon"
readme = "README.md"
license = { text = "MIT" }
requires-python = ">=3.12"
authors = [{ name = "{author}", email = "{email}" }]
classifiers = [
    "Development Status :: 1 - Planning",
    "Programming Language :: Python :: 3.12",
]

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"
"#;

/// Write the minimal package structure into `target`.
pub fn create_placeholder(name: &str, author: &str, email: &str, target: &Path) -> Result<()> {
    let module = name.replace('-', "_");

    let pyproject = PYPROJECT_TEMPLATE
        .replace("{name}", name)
        .replace("{version}", RESERVE_VERSION)
        .replace("{author}", author)
        .replace("{email}", email);
    std::fs::write(target.join("pyproject.toml"), pyproject)?;

    std::fs::write(
        target.join("README.md"),
        format!("# {name}\n\nPackage name reserved. Implementation coming soon.\n"),
    )?;

    let src = target.join("src").join(&module);
    std::fs::create_dir_all(&src)?;
    std::fs::write(
        src.join("__init__.py"),
        format!("__version__ = \"{RESERVE_VERSION}\"\n"),
    )?;
    std::fs::write(src.join("py.typed"), "")?;
    Ok(())
}

fn run_uv(args: &[&str], cwd: &Path, token: Option<&str>) -> Result<(bool, String)> {
    let mut command = Command::new("uv");
    command.args(args).current_dir(cwd);
    if let Some(token) = token {
        command.env("UV_PUBLISH_TOKEN", token);
    }
    let output = command
        .output()
        .with_context(|| format!("failed to run uv {}", args.join(" ")))?;
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    Ok((output.status.success(), stderr))
}

/// Build the placeholder sdist/wheel with `uv build`.
fn build_package(path: &Path) -> Result<(bool, String)> {
    run_uv(&["build"], path, None)
}

/// Publish with `uv publish`.
fn publish_package(path: &Path, token: &str) -> Result<(bool, String)> {
    run_uv(&["publish"], path, Some(token))
}

/// Reserve a package name on PyPI.
pub fn reserve(name: &str, author: &str, email: &str, token: &str, dry_run: bool) -> ReserveResult {
    let failure = |message: String| ReserveResult {
        success: false,
        package_name: name.to_string(),
        version: RESERVE_VERSION.to_string(),
        message,
    };
    let success = |message: String| ReserveResult {
        success: true,
        package_name: name.to_string(),
        version: RESERVE_VERSION.to_string(),
        message,
    };

    match check_availability(name) {
        Availability::Taken => {
            return failure(format!("Package '{name}' is already taken on PyPI"));
        }
        Availability::Error => {
            return failure("Failed to check PyPI availability".into());
        }
        Availability::Available => {}
    }

    if dry_run {
        return success(format!("Dry run — would reserve '{name}' on PyPI"));
    }

    let staging = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(err) => return failure(format!("Failed to create staging directory: {err}")),
    };
    if let Err(err) = create_placeholder(name, author, email, staging.path()) {
        return failure(format!("Failed to stage placeholder package: {err:#}"));
    }

    match build_package(staging.path()) {
        Ok((true, _)) => {}
        Ok((false, stderr)) => return failure(format!("Build failed: {stderr}")),
        Err(err) => return failure(format!("Build failed: {err:#}")),
    }

    match publish_package(staging.path(), token) {
        Ok((true, _)) => {
            info!("reserved '{name}' at {RESERVE_VERSION}");
            success(format!("Reserved '{name}' on PyPI at {RESERVE_VERSION}"))
        }
        Ok((false, stderr)) => {
            if stderr.to_lowercase().contains("already exists") {
                // The initial check said Available, so re-check to tell an
                // idempotent re-run from a lost race:
                //   Taken → someone else published between check and publish
                //   Available/Error → our own prior reservation
                if check_availability(name) == Availability::Taken {
                    warn!("race: '{name}' was taken between availability check and publish");
                    return failure(format!(
                        "Package '{name}' was taken by another user between availability check and publish"
                    ));
                }
                return success(format!("Package '{name}' already reserved"));
            }
            failure(format!("Publish failed: {stderr}"))
        }
        Err(err) => failure(format!("Publish failed: {err:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_package_is_complete() {
        let dir = tempfile::tempdir().unwrap();
        create_placeholder("demo-pkg", "Jane Doe", "jane@example.com", dir.path()).unwrap();

        let pyproject =
            std::fs::read_to_string(dir.path().join("pyproject.toml")).unwrap();
        assert!(pyproject.contains("name = \"demo-pkg\""));
        assert!(pyproject.contains(&format!("version = \"{RESERVE_VERSION}\"")));
        assert!(pyproject.contains("Jane Doe"));

        assert!(dir.path().join("README.md").exists());
        assert!(dir.path().join("src/demo_pkg/__init__.py").exists());
        assert!(dir.path().join("src/demo_pkg/py.typed").exists());

        let init =
            std::fs::read_to_string(dir.path().join("src/demo_pkg/__init__.py")).unwrap();
        assert_eq!(init, "__version__ = \"0.0.1.dev0\"\n");
    }

    #[test]
    fn placeholder_pyproject_parses() {
        let dir = tempfile::tempdir().unwrap();
        create_placeholder("demo", "Jane", "j@example.com", dir.path()).unwrap();
        let content = std::fs::read_to_string(dir.path().join("pyproject.toml")).unwrap();
        let value: toml::Value = content.parse().unwrap();
        assert_eq!(
            value["project"]["version"].as_str(),
            Some(RESERVE_VERSION)
        );
    }
}
