//! Audit checks for changelog management (2 checks, 5 pts).

use std::path::Path;

use super::{load_pyproject, Outcome};

/// [tool.git-cliff] configured in pyproject.toml.
pub fn gitcliff(project: &Path) -> Outcome {
    if !project.join("pyproject.toml").exists() {
        return Outcome::fail(
            "pyproject.toml not found",
            vec![],
            "Create pyproject.toml with [tool.git-cliff] section.",
        );
    }
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml unparsable",
            vec![],
            "Fix TOML syntax and add [tool.git-cliff] section.",
        );
    };
    let configured = data
        .get("tool")
        .and_then(|t| t.get("git-cliff"))
        .is_some();
    if !configured {
        return Outcome::fail(
            "No [tool.git-cliff] config found",
            vec!["git-cliff auto-generates CHANGELOG from conventional commits".into()],
            "Add [tool.git-cliff.changelog] and [tool.git-cliff.git] to pyproject.toml.",
        );
    }
    Outcome::pass("git-cliff configured")
}

/// No hand-maintained CHANGELOG.md (git-cliff generates it).
pub fn no_manual(project: &Path) -> Outcome {
    if project.join("CHANGELOG.md").exists() {
        return Outcome::fail(
            "Manual CHANGELOG.md found",
            vec!["git-cliff should auto-generate the changelog".into()],
            "Delete CHANGELOG.md - git-cliff generates it from conventional commits.",
        );
    }
    Outcome::pass("No manual CHANGELOG.md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gitcliff_distinguishes_missing_unparsable_and_unconfigured() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(gitcliff(dir.path()).message, "pyproject.toml not found");

        std::fs::write(dir.path().join("pyproject.toml"), "broken [").unwrap();
        assert_eq!(gitcliff(dir.path()).message, "pyproject.toml unparsable");

        std::fs::write(dir.path().join("pyproject.toml"), "[project]\nname = \"x\"\n").unwrap();
        assert_eq!(gitcliff(dir.path()).message, "No [tool.git-cliff] config found");

        std::fs::write(
            dir.path().join("pyproject.toml"),
            "[tool.git-cliff.changelog]\nbody = \"x\"\n",
        )
        .unwrap();
        assert!(gitcliff(dir.path()).passed);
    }

    #[test]
    fn manual_changelog_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(no_manual(dir.path()).passed);

        std::fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n").unwrap();
        let outcome = no_manual(dir.path());
        assert!(!outcome.passed);
        assert!(!outcome.fix.is_empty());
    }
}
