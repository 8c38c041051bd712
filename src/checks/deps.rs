//! Audit checks for dependency hygiene (2 checks, 5 pts).

use std::path::Path;

use super::{load_pyproject, Outcome};

fn group_joined(data: &toml::Value, group: &str) -> String {
    data.get("dependency-groups")
        .and_then(|g| g.get(group))
        .and_then(|v| v.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .unwrap_or_default()
}

/// Dev group includes pytest, ruff, mypy, pre-commit.
pub fn dev_group(project: &Path) -> Outcome {
    const REQUIRED: [&str; 4] = ["pytest", "ruff", "mypy", "pre-commit"];
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Create pyproject.toml with [dependency-groups] dev group.",
        );
    };
    let dev = group_joined(&data, "dev");
    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|d| !dev.contains(d))
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("Dev group missing {} dep(s)", missing.len()),
            vec![format!("Missing: {}", missing.join(", "))],
            format!("Add {} to [dependency-groups] dev.", missing.join(", ")),
        );
    }
    Outcome::pass("Dev deps complete")
}

/// Docs group includes the mkdocs stack.
pub fn docs_group(project: &Path) -> Outcome {
    const REQUIRED: [&str; 4] = [
        "mkdocs-material",
        "mkdocstrings",
        "mkdocs-gen-files",
        "mkdocs-literate-nav",
    ];
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Create pyproject.toml with [dependency-groups] docs group.",
        );
    };
    let docs = group_joined(&data, "docs");
    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|d| !docs.contains(d))
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("Docs group missing {} dep(s)", missing.len()),
            vec![format!("Missing: {}", missing.join(", "))],
            format!("Add {} to [dependency-groups] docs.", missing.join(", ")),
        );
    }
    Outcome::pass("Docs deps complete")
}
