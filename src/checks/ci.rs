//! Audit checks for CI workflows (7 checks, 18 pts).

use std::path::Path;

use super::{read_project_file, Outcome};

fn read_ci(project: &Path) -> Option<String> {
    read_project_file(project, ".github/workflows/ci.yml")
}

/// .github/workflows/ci.yml exists.
pub fn workflow_exists(project: &Path) -> Outcome {
    if read_ci(project).is_none() {
        return Outcome::fail(
            "CI workflow not found",
            vec!["Expected: .github/workflows/ci.yml".into()],
            "Create .github/workflows/ci.yml with lint, test, and security jobs.",
        );
    }
    Outcome::pass("CI workflow found")
}

/// CI has a lint job.
pub fn lint_job(project: &Path) -> Outcome {
    let has_lint = read_ci(project).is_some_and(|c| c.to_lowercase().contains("lint"));
    if !has_lint {
        return Outcome::fail(
            "No lint job in CI",
            vec!["CI should have a lint/type-check job".into()],
            "Add a lint job to .github/workflows/ci.yml that runs `make lint`.",
        );
    }
    Outcome::pass("Lint job present")
}

/// CI has a test job with a Python matrix.
pub fn test_job(project: &Path) -> Outcome {
    let has_test = read_ci(project).is_some_and(|c| c.to_lowercase().contains("test"));
    if !has_test {
        return Outcome::fail(
            "No test job in CI",
            vec!["CI should have a test job with python-version matrix".into()],
            "Add a test job with strategy.matrix.python-version.",
        );
    }
    Outcome::pass("Test job present")
}

/// CI has a security/pip-audit job.
pub fn security_job(project: &Path) -> Outcome {
    let has_audit = read_ci(project).is_some_and(|c| c.to_lowercase().contains("audit"));
    if !has_audit {
        return Outcome::fail(
            "No security audit job in CI",
            vec!["CI should run pip-audit for dependency scanning".into()],
            "Add a security job that runs `uv run pip-audit`.",
        );
    }
    Outcome::pass("Security audit job present")
}

/// CI uploads coverage.
pub fn coverage_upload(project: &Path) -> Outcome {
    let has_upload = read_ci(project).is_some_and(|c| {
        let lower = c.to_lowercase();
        lower.contains("coveralls") || lower.contains("codecov")
    });
    if !has_upload {
        return Outcome::fail(
            "No coverage upload in CI",
            vec!["CI should upload coverage to Coveralls or Codecov".into()],
            "Add coverallsapp/github-action or codecov/codecov-action step.",
        );
    }
    Outcome::pass("Coverage upload configured")
}

/// A publish workflow uses PyPI trusted publishing (OIDC).
pub fn trusted_publishing(project: &Path) -> Outcome {
    let workflow = ["publish.yml", "release.yml"].iter().find_map(|name| {
        read_project_file(project, &format!(".github/workflows/{name}"))
    });
    let has_oidc = workflow.is_some_and(|c| {
        let lower = c.to_lowercase();
        lower.contains("id-token") && lower.contains("pypi")
    });
    if !has_oidc {
        return Outcome::fail(
            "No trusted publishing workflow",
            vec!["Expected: .github/workflows/publish.yml with permissions id-token: write".into()],
            "Add a publish workflow using PyPI trusted publishing (id-token: write).",
        );
    }
    Outcome::pass("Trusted publishing configured")
}

/// Dependabot keeps dependencies and actions updated.
pub fn dependabot(project: &Path) -> Outcome {
    if !project.join(".github/dependabot.yml").exists() {
        return Outcome::fail(
            "No dependabot config",
            vec!["Expected: .github/dependabot.yml".into()],
            "Add .github/dependabot.yml with weekly pip and github-actions updates.",
        );
    }
    Outcome::pass("Dependabot configured")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_ci(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let workflows = dir.path().join(".github/workflows");
        std::fs::create_dir_all(&workflows).unwrap();
        std::fs::write(workflows.join("ci.yml"), content).unwrap();
        dir
    }

    #[test]
    fn missing_workflow_fails_every_ci_content_check() {
        let dir = tempfile::tempdir().unwrap();
        for check in [workflow_exists, lint_job, test_job, security_job, coverage_upload] {
            let outcome = check(dir.path());
            assert!(!outcome.passed);
            assert!(!outcome.fix.is_empty());
        }
    }

    #[test]
    fn content_checks_match_case_insensitively() {
        let dir = project_with_ci("jobs:\n  Lint:\n  Test:\n  pip-Audit:\n  coveralls:\n");
        assert!(lint_job(dir.path()).passed);
        assert!(test_job(dir.path()).passed);
        assert!(security_job(dir.path()).passed);
        assert!(coverage_upload(dir.path()).passed);
    }

    #[test]
    fn trusted_publishing_needs_oidc_and_pypi() {
        let dir = tempfile::tempdir().unwrap();
        let workflows = dir.path().join(".github/workflows");
        std::fs::create_dir_all(&workflows).unwrap();

        std::fs::write(workflows.join("publish.yml"), "permissions:\n  contents: read\n").unwrap();
        assert!(!trusted_publishing(dir.path()).passed);

        std::fs::write(
            workflows.join("publish.yml"),
            "permissions:\n  id-token: write\nenvironment: pypi\n",
        )
        .unwrap();
        assert!(trusted_publishing(dir.path()).passed);
    }

    #[test]
    fn dependabot_checks_config_presence() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!dependabot(dir.path()).passed);

        std::fs::create_dir_all(dir.path().join(".github")).unwrap();
        std::fs::write(dir.path().join(".github/dependabot.yml"), "version: 2\n").unwrap();
        assert!(dependabot(dir.path()).passed);
    }
}
