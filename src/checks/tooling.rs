//! Audit checks for developer tooling (7 checks, 16 pts).

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::{read_project_file, Outcome};

fn read_precommit(project: &Path) -> Option<String> {
    read_project_file(project, ".pre-commit-config.yaml")
}

/// .pre-commit-config.yaml exists.
pub fn precommit_exists(project: &Path) -> Outcome {
    if read_precommit(project).is_none() {
        return Outcome::fail(
            ".pre-commit-config.yaml not found",
            vec![],
            "Create .pre-commit-config.yaml with ruff, mypy, and conventional-commit hooks.",
        );
    }
    Outcome::pass(".pre-commit-config.yaml found")
}

/// Ruff hook present.
pub fn precommit_ruff(project: &Path) -> Outcome {
    let has_hook = read_precommit(project).is_some_and(|c| c.contains("ruff"));
    if !has_hook {
        return Outcome::fail(
            "No ruff hook in pre-commit",
            vec!["ruff-pre-commit hook should be configured".into()],
            "Add ruff-pre-commit repo with ruff and ruff-format hooks.",
        );
    }
    Outcome::pass("Ruff hook present")
}

/// MyPy hook present.
pub fn precommit_mypy(project: &Path) -> Outcome {
    let has_hook = read_precommit(project).is_some_and(|c| c.contains("mypy"));
    if !has_hook {
        return Outcome::fail(
            "No mypy hook in pre-commit",
            vec!["mirrors-mypy hook should be configured".into()],
            "Add pre-commit/mirrors-mypy repo with mypy hook.",
        );
    }
    Outcome::pass("MyPy hook present")
}

/// Conventional-commits hook present.
pub fn precommit_conventional(project: &Path) -> Outcome {
    let has_hook = read_precommit(project).is_some_and(|c| c.contains("conventional-pre-commit"));
    if !has_hook {
        return Outcome::fail(
            "No conventional-commits hook in pre-commit",
            vec!["conventional-pre-commit hook enforces commit message format".into()],
            "Add compilerla/conventional-pre-commit repo.",
        );
    }
    Outcome::pass("Conventional commits hook present")
}

/// Basic hygiene hooks present.
pub fn precommit_basic(project: &Path) -> Outcome {
    const REQUIRED: [&str; 3] = ["trailing-whitespace", "end-of-file-fixer", "check-yaml"];
    let Some(content) = read_precommit(project) else {
        return Outcome::fail(
            "No pre-commit config",
            vec![format!("Missing: {}", REQUIRED.join(", "))],
            "Add pre-commit-hooks repo with basic hooks.",
        );
    };
    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|h| !content.contains(h))
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("Missing {} basic hook(s)", missing.len()),
            vec![format!("Missing: {}", missing.join(", "))],
            format!("Add {} to pre-commit-hooks.", missing.join(", ")),
        );
    }
    Outcome::pass("Basic hooks present")
}

/// Pre-commit hooks are activated in .git/hooks/. Passes vacuously when
/// there is no pre-commit config to install.
pub fn precommit_installed(project: &Path) -> Outcome {
    if !project.join(".pre-commit-config.yaml").exists() {
        return Outcome::pass("No pre-commit config (nothing to install)");
    }
    if project.join(".git/hooks/pre-commit").exists() {
        return Outcome::pass("Pre-commit hooks installed");
    }
    Outcome::fail(
        "Pre-commit hooks not installed",
        vec![".pre-commit-config.yaml exists but hooks are not activated".into()],
        "Run 'pre-commit install' to activate hooks.",
    )
}

static TARGET_PATTERN: OnceLock<Regex> = OnceLock::new();

fn target_pattern() -> &'static Regex {
    TARGET_PATTERN
        .get_or_init(|| Regex::new(r"(?m)^([a-zA-Z_][a-zA-Z0-9_-]*):").expect("valid regex"))
}

/// Makefile with the standard targets.
pub fn makefile(project: &Path) -> Outcome {
    const REQUIRED: [&str; 8] = [
        "install",
        "check",
        "lint",
        "format",
        "test",
        "audit",
        "clean",
        "docs-serve",
    ];
    let Some(content) = read_project_file(project, "Makefile") else {
        return Outcome::fail(
            "Makefile not found",
            vec![],
            "Create a Makefile with install, check, lint, format, test, audit, clean, docs-serve targets.",
        );
    };
    let targets: Vec<&str> = target_pattern()
        .captures_iter(&content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect();
    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|t| !targets.contains(t))
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("Makefile missing {} target(s)", missing.len()),
            vec![format!("Missing targets: {}", missing.join(", "))],
            format!("Add targets to Makefile: {}.", missing.join(", ")),
        );
    }
    Outcome::pass("Makefile complete")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precommit_installed_passes_vacuously_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = precommit_installed(dir.path());
        assert!(outcome.passed);
        assert_eq!(outcome.message, "No pre-commit config (nothing to install)");
    }

    #[test]
    fn precommit_installed_requires_activated_hook() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".pre-commit-config.yaml"), "repos: []\n").unwrap();
        assert!(!precommit_installed(dir.path()).passed);

        std::fs::create_dir_all(dir.path().join(".git/hooks")).unwrap();
        std::fs::write(dir.path().join(".git/hooks/pre-commit"), "#!/bin/sh\n").unwrap();
        assert!(precommit_installed(dir.path()).passed);
    }

    #[test]
    fn makefile_parses_target_definitions_not_mentions() {
        let dir = tempfile::tempdir().unwrap();
        // "lint" only appears in a recipe body, not as a target.
        std::fs::write(
            dir.path().join("Makefile"),
            "install:\n\tuv sync\n\ncheck:\n\techo run lint format test audit clean docs-serve\n",
        )
        .unwrap();
        let outcome = makefile(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "Makefile missing 6 target(s)");

        std::fs::write(
            dir.path().join("Makefile"),
            "install:\ncheck:\nlint:\nformat:\ntest:\naudit:\nclean:\ndocs-serve:\n",
        )
        .unwrap();
        assert!(makefile(dir.path()).passed);
    }

    #[test]
    fn basic_hooks_report_missing_subset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".pre-commit-config.yaml"),
            "hooks:\n  - id: trailing-whitespace\n",
        )
        .unwrap();
        let outcome = precommit_basic(dir.path());
        assert!(!outcome.passed);
        assert_eq!(
            outcome.details,
            vec!["Missing: end-of-file-fixer, check-yaml"]
        );
    }
}
