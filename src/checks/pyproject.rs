//! Audit checks for pyproject.toml (9 checks, 27 pts).

use std::path::Path;

use toml::Value;

use super::{load_pyproject, Outcome};

fn tool_table<'a>(data: &'a Value, name: &str) -> Option<&'a Value> {
    data.get("tool").and_then(|t| t.get(name))
}

/// pyproject.toml exists and is parsable.
pub fn exists(project: &Path) -> Outcome {
    let path = project.join("pyproject.toml");
    if !path.exists() {
        return Outcome::fail(
            "pyproject.toml not found",
            vec![],
            "Create a pyproject.toml at the project root.",
        );
    }
    if load_pyproject(project).is_none() {
        return Outcome::fail(
            "pyproject.toml is unparsable",
            vec!["File exists but contains invalid TOML".into()],
            "Fix TOML syntax errors in pyproject.toml.",
        );
    }
    Outcome::pass("pyproject.toml found")
}

/// [project.urls] carries all four standard links.
pub fn urls(project: &Path) -> Outcome {
    const REQUIRED: [&str; 4] = ["Homepage", "Documentation", "Repository", "Issues"];
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Create pyproject.toml with [project.urls] section.",
        );
    };
    let urls = data
        .get("project")
        .and_then(|p| p.get("urls"))
        .and_then(|u| u.as_table());
    let present: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|k| urls.is_some_and(|u| u.contains_key(*k)))
        .collect();
    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|k| !present.contains(k))
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("Missing {} URL(s) in [project.urls]", missing.len()),
            vec![
                format!("Missing: {}", missing.join(", ")),
                format!("Present: {}", present.join(", ")),
            ],
            format!(
                "Add {} to [project.urls] in pyproject.toml.",
                missing.join(", ")
            ),
        );
    }
    Outcome::pass("All 4 URLs present")
}

/// Version is dynamic and driven by hatch-vcs.
pub fn dynamic_version(project: &Path) -> Outcome {
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Create pyproject.toml with dynamic version using hatch-vcs.",
        );
    };
    let has_dynamic = data
        .get("project")
        .and_then(|p| p.get("dynamic"))
        .and_then(|d| d.as_array())
        .is_some_and(|d| d.iter().any(|v| v.as_str() == Some("version")));
    let has_hatch_vcs = data
        .get("build-system")
        .and_then(|b| b.get("requires"))
        .and_then(|r| r.as_array())
        .is_some_and(|r| {
            r.iter()
                .any(|v| v.as_str().is_some_and(|s| s.contains("hatch-vcs")))
        });
    let mut problems = Vec::new();
    if !has_dynamic {
        problems.push("Missing: dynamic = [\"version\"]".to_string());
    }
    if !has_hatch_vcs {
        problems.push("Missing: hatch-vcs in build-system.requires".to_string());
    }
    if !problems.is_empty() {
        return Outcome::fail(
            "Version is not dynamically managed",
            problems,
            "Add hatch-vcs to build-system.requires and set dynamic = [\"version\"].",
        );
    }
    Outcome::pass("Dynamic version with hatch-vcs")
}

/// [tool.mypy] enables the strict baseline settings.
pub fn mypy(project: &Path) -> Outcome {
    const REQUIRED: [&str; 4] = [
        "strict",
        "pretty",
        "disallow_incomplete_defs",
        "check_untyped_defs",
    ];
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Create pyproject.toml with [tool.mypy] section.",
        );
    };
    let mypy = tool_table(&data, "mypy");
    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|k| {
            !mypy
                .and_then(|m| m.get(*k))
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        })
        .collect();
    let present: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|k| !missing.contains(k))
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("MyPy config incomplete — missing {} setting(s)", missing.len()),
            vec![
                format!("Missing: {}", missing.join(", ")),
                format!("Present: {}", present.join(", ")),
            ],
            format!(
                "Add {} to [tool.mypy].",
                missing
                    .iter()
                    .map(|k| format!("{k} = true"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );
    }
    Outcome::pass("MyPy fully configured")
}

/// [tool.ruff.lint] has per-file-ignores and isort first-party config.
pub fn ruff(project: &Path) -> Outcome {
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Create pyproject.toml with [tool.ruff.lint] section.",
        );
    };
    let lint = tool_table(&data, "ruff").and_then(|r| r.get("lint"));
    let mut problems = Vec::new();
    if lint.and_then(|l| l.get("per-file-ignores")).is_none() {
        problems.push("Missing: [tool.ruff.lint.per-file-ignores]".to_string());
    }
    let has_first_party = lint
        .and_then(|l| l.get("isort"))
        .and_then(|i| i.get("known-first-party"))
        .is_some();
    if !has_first_party {
        problems.push("Missing: known-first-party in [tool.ruff.lint.isort]".to_string());
    }
    if !problems.is_empty() {
        return Outcome::fail(
            "Ruff config incomplete",
            problems,
            "Add per-file-ignores for tests and known-first-party to ruff config.",
        );
    }
    Outcome::pass("Ruff fully configured")
}

/// [tool.pytest.ini_options] is complete.
pub fn pytest(project: &Path) -> Outcome {
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Create pyproject.toml with [tool.pytest.ini_options].",
        );
    };
    let cfg = tool_table(&data, "pytest").and_then(|p| p.get("ini_options"));
    let addopts = cfg
        .and_then(|c| c.get("addopts"))
        .and_then(|a| a.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();
    let mut problems = Vec::new();
    if !addopts.contains("--strict-markers") {
        problems.push("Missing: --strict-markers in addopts".to_string());
    }
    if !addopts.contains("--strict-config") {
        problems.push("Missing: --strict-config in addopts".to_string());
    }
    if !addopts.contains("--import-mode=importlib") {
        problems.push("Missing: --import-mode=importlib in addopts".to_string());
    }
    if cfg.and_then(|c| c.get("pythonpath")).is_none() {
        problems.push("Missing: pythonpath = [\"src\"]".to_string());
    }
    if cfg.and_then(|c| c.get("filterwarnings")).is_none() {
        problems.push("Missing: filterwarnings".to_string());
    }
    if !problems.is_empty() {
        return Outcome::fail(
            format!("Pytest config incomplete — missing {} setting(s)", problems.len()),
            problems,
            "Add missing settings to [tool.pytest.ini_options].",
        );
    }
    Outcome::pass("Pytest fully configured")
}

/// [tool.coverage] enables branch coverage, relative files, xml output,
/// and report exclusions.
pub fn coverage(project: &Path) -> Outcome {
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Create pyproject.toml with [tool.coverage] sections.",
        );
    };
    let cov = tool_table(&data, "coverage");
    let run_flag = |key: &str| {
        cov.and_then(|c| c.get("run"))
            .and_then(|r| r.get(key))
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    };
    let mut problems = Vec::new();
    if !run_flag("branch") {
        problems.push("Missing: branch = true in [tool.coverage.run]".to_string());
    }
    if !run_flag("relative_files") {
        problems.push("Missing: relative_files = true in [tool.coverage.run]".to_string());
    }
    if cov.and_then(|c| c.get("xml")).is_none() {
        problems.push("Missing: [tool.coverage.xml] section".to_string());
    }
    let has_exclude = cov
        .and_then(|c| c.get("report"))
        .and_then(|r| r.get("exclude_lines"))
        .is_some();
    if !has_exclude {
        problems.push("Missing: exclude_lines in [tool.coverage.report]".to_string());
    }
    if !problems.is_empty() {
        return Outcome::fail(
            format!(
                "Coverage config incomplete — missing {} setting(s)",
                problems.len()
            ),
            problems,
            "Add missing settings to [tool.coverage] sections.",
        );
    }
    Outcome::pass("Coverage fully configured")
}

/// Required trove classifiers are declared.
pub fn classifiers(project: &Path) -> Outcome {
    const REQUIRED: [(&str, &str); 3] = [
        ("Development Status", "Development Status ::"),
        ("Python version", "Programming Language :: Python :: 3"),
        ("Typed", "Typing :: Typed"),
    ];
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Add classifiers to [project] in pyproject.toml.",
        );
    };
    let classifiers: Vec<&str> = data
        .get("project")
        .and_then(|p| p.get("classifiers"))
        .and_then(|c| c.as_array())
        .map(|a| a.iter().filter_map(|v| v.as_str()).collect())
        .unwrap_or_default();
    let missing: Vec<&str> = REQUIRED
        .iter()
        .filter(|(_, prefix)| !classifiers.iter().any(|c| c.starts_with(prefix)))
        .map(|(label, _)| *label)
        .collect();
    if !missing.is_empty() {
        return Outcome::fail(
            format!("Missing {} required classifier(s)", missing.len()),
            vec![format!("Missing: {}", missing.join(", "))],
            "Add Development Status, Python version, and Typing :: Typed classifiers.",
        );
    }
    Outcome::pass("Required classifiers present")
}

/// Essential ruff rule families are activated.
pub fn ruff_rules(project: &Path) -> Outcome {
    const REQUIRED: [&str; 5] = ["E", "F", "I", "UP", "B"];
    let Some(data) = load_pyproject(project) else {
        return Outcome::fail(
            "pyproject.toml not found or unparsable",
            vec![],
            "Add [tool.ruff.lint] select with E, F, I, UP, B.",
        );
    };
    let lint = tool_table(&data, "ruff").and_then(|r| r.get("lint"));
    let rules: Vec<&str> = ["select", "extend-select"]
        .iter()
        .filter_map(|key| lint.and_then(|l| l.get(*key)).and_then(|v| v.as_array()))
        .flatten()
        .filter_map(|v| v.as_str())
        .collect();
    // "ALL" includes everything
    let missing: Vec<&str> = if rules.contains(&"ALL") {
        vec![]
    } else {
        REQUIRED
            .iter()
            .copied()
            .filter(|r| !rules.contains(r))
            .collect()
    };
    if !missing.is_empty() {
        return Outcome::fail(
            format!("Missing {} essential ruff rule(s)", missing.len()),
            vec![format!("Missing: {}", missing.join(", "))],
            format!("Add {} to [tool.ruff.lint] select.", missing.join(", ")),
        );
    }
    Outcome::pass("Essential ruff rules activated")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with(content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pyproject.toml"), content).unwrap();
        dir
    }

    #[test]
    fn exists_distinguishes_missing_from_unparsable() {
        let empty = tempfile::tempdir().unwrap();
        let missing = exists(empty.path());
        assert!(!missing.passed);
        assert_eq!(missing.message, "pyproject.toml not found");

        let corrupt = project_with("not [ valid toml");
        let unparsable = exists(corrupt.path());
        assert!(!unparsable.passed);
        assert_eq!(unparsable.message, "pyproject.toml is unparsable");

        let ok = project_with("[project]\nname = \"demo\"\n");
        assert!(exists(ok.path()).passed);
    }

    #[test]
    fn urls_reports_missing_and_present() {
        let dir = project_with(
            "[project.urls]\nHomepage = \"https://x\"\nRepository = \"https://x\"\n",
        );
        let outcome = urls(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "Missing 2 URL(s) in [project.urls]");
        assert_eq!(outcome.details[0], "Missing: Documentation, Issues");
        assert_eq!(outcome.details[1], "Present: Homepage, Repository");
        assert!(outcome.fix.contains("Documentation, Issues"));
    }

    #[test]
    fn dynamic_version_needs_both_halves() {
        let dir = project_with("[project]\ndynamic = [\"version\"]\n");
        let outcome = dynamic_version(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.details, vec!["Missing: hatch-vcs in build-system.requires"]);

        let dir = project_with(
            "[project]\ndynamic = [\"version\"]\n[build-system]\nrequires = [\"hatchling\", \"hatch-vcs\"]\n",
        );
        assert!(dynamic_version(dir.path()).passed);
    }

    #[test]
    fn mypy_requires_all_strict_flags() {
        let dir = project_with("[tool.mypy]\nstrict = true\npretty = true\n");
        let outcome = mypy(dir.path());
        assert!(!outcome.passed);
        assert!(outcome.details[0].contains("disallow_incomplete_defs"));
        assert!(outcome.fix.contains("check_untyped_defs = true"));

        let dir = project_with(
            "[tool.mypy]\nstrict = true\npretty = true\ndisallow_incomplete_defs = true\ncheck_untyped_defs = true\n",
        );
        assert!(mypy(dir.path()).passed);
    }

    #[test]
    fn pytest_checks_addopts_and_keys() {
        let dir = project_with(
            "[tool.pytest.ini_options]\naddopts = [\"--strict-markers\", \"--strict-config\", \"--import-mode=importlib\"]\npythonpath = [\"src\"]\nfilterwarnings = [\"error\"]\n",
        );
        assert!(pytest(dir.path()).passed);

        let dir = project_with("[tool.pytest.ini_options]\naddopts = [\"-q\"]\n");
        let outcome = pytest(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.details.len(), 5);
    }

    #[test]
    fn ruff_rules_accepts_all_selector() {
        let dir = project_with("[tool.ruff.lint]\nselect = [\"ALL\"]\n");
        assert!(ruff_rules(dir.path()).passed);

        let dir = project_with(
            "[tool.ruff.lint]\nselect = [\"E\", \"F\"]\nextend-select = [\"I\", \"UP\"]\n",
        );
        let outcome = ruff_rules(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.details, vec!["Missing: B"]);
    }

    #[test]
    fn classifiers_match_by_prefix() {
        let dir = project_with(
            "[project]\nclassifiers = [\n  \"Development Status :: 4 - Beta\",\n  \"Programming Language :: Python :: 3.12\",\n  \"Typing :: Typed\",\n]\n",
        );
        assert!(classifiers(dir.path()).passed);
    }
}
