//! Audit checks for documentation (5 checks, 14 pts).

use std::path::Path;

use super::{read_project_file, Outcome};

/// mkdocs.yml exists.
pub fn mkdocs_exists(project: &Path) -> Outcome {
    if !project.join("mkdocs.yml").exists() {
        return Outcome::fail(
            "mkdocs.yml not found",
            vec![],
            "Create mkdocs.yml with Material theme and Diátaxis navigation.",
        );
    }
    Outcome::pass("mkdocs.yml found")
}

/// Nav covers the four Diátaxis sections.
pub fn diataxis_nav(project: &Path) -> Outcome {
    let Some(content) = read_project_file(project, "mkdocs.yml") else {
        return Outcome::fail(
            "mkdocs.yml not found",
            vec![],
            "Create mkdocs.yml with Diátaxis nav structure.",
        );
    };
    let lower = content.to_lowercase();
    let sections = [
        ("Tutorials", lower.contains("tutorial")),
        ("How-To", lower.contains("how-to") || lower.contains("howto")),
        ("Reference", lower.contains("reference")),
        ("Explanation", lower.contains("explanation")),
    ];
    let missing: Vec<&str> = sections
        .iter()
        .filter(|(_, present)| !*present)
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        let present: Vec<&str> = sections
            .iter()
            .filter(|(_, present)| *present)
            .map(|(name, _)| *name)
            .collect();
        return Outcome::fail(
            format!("Diátaxis nav incomplete — missing {} section(s)", missing.len()),
            vec![
                format!("Missing: {}", missing.join(", ")),
                format!("Present: {}", present.join(", ")),
            ],
            format!("Add {} section(s) to mkdocs.yml nav.", missing.join(", ")),
        );
    }
    Outcome::pass("Full Diátaxis nav structure")
}

/// gen-files, literate-nav, and mkdocstrings plugins configured.
pub fn plugins(project: &Path) -> Outcome {
    const REQUIRED: [&str; 3] = ["gen-files", "literate-nav", "mkdocstrings"];
    let Some(content) = read_project_file(project, "mkdocs.yml") else {
        return Outcome::fail(
            "mkdocs.yml not found",
            vec![],
            "Create mkdocs.yml with gen-files, literate-nav, mkdocstrings plugins.",
        );
    };
    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|p| !content.contains(p))
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("Missing {} plugin(s)", missing.len()),
            vec![format!("Missing: {}", missing.join(", "))],
            format!("Add {} to mkdocs.yml plugins.", missing.join(", ")),
        );
    }
    Outcome::pass("All plugins configured")
}

/// docs/gen_ref_pages.py exists for the API reference.
pub fn gen_ref_pages(project: &Path) -> Outcome {
    if !project.join("docs/gen_ref_pages.py").exists() {
        return Outcome::fail(
            "docs/gen_ref_pages.py not found",
            vec!["Auto-gen script needed for mkdocstrings API reference".into()],
            "Create docs/gen_ref_pages.py for automatic API reference generation.",
        );
    }
    Outcome::pass("gen_ref_pages.py found")
}

/// README.md carries the standard sections.
pub fn readme(project: &Path) -> Outcome {
    let Some(content) = read_project_file(project, "README.md") else {
        return Outcome::fail(
            "README.md not found",
            vec![],
            "Create README.md following the gold-standard layout.",
        );
    };
    let lower = content.to_lowercase();
    let sections = [
        ("Features", content.contains("## Features") || lower.contains("## features")),
        ("Installation", content.contains("## Installation") || lower.contains("## install")),
        ("Development", content.contains("## Development") || lower.contains("## develop")),
        ("License", content.contains("## License") || lower.contains("## license")),
    ];
    let missing: Vec<&str> = sections
        .iter()
        .filter(|(_, present)| !*present)
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("README missing {} section(s)", missing.len()),
            vec![format!("Missing: {}", missing.join(", "))],
            format!("Add {} section(s) to README.md.", missing.join(", ")),
        );
    }
    Outcome::pass("README follows standard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diataxis_nav_reports_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("mkdocs.yml"),
            "nav:\n  - Tutorials: tutorials/\n  - Reference: reference/\n",
        )
        .unwrap();
        let outcome = diataxis_nav(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.details[0], "Missing: How-To, Explanation");
        assert_eq!(outcome.details[1], "Present: Tutorials, Reference");
    }

    #[test]
    fn readme_accepts_lowercase_headers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("README.md"),
            "# demo\n\n## features\n\n## installation\n\n## development\n\n## license\n",
        )
        .unwrap();
        assert!(readme(dir.path()).passed);
    }

    #[test]
    fn plugins_need_all_three() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("mkdocs.yml"),
            "plugins:\n  - gen-files\n  - mkdocstrings\n",
        )
        .unwrap();
        let outcome = plugins(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.details, vec!["Missing: literate-nav"]);
    }
}
