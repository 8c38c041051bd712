//! Audit checks for project structure (7 checks, 19 pts).

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use super::Outcome;

/// Package directories under src/ (dirs containing an __init__.py).
fn src_packages(project: &Path) -> Vec<PathBuf> {
    let src = project.join("src");
    let Ok(entries) = std::fs::read_dir(&src) else {
        return vec![];
    };
    entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir() && p.join("__init__.py").exists())
        .collect()
}

/// src/<pkg>/ layout with __init__.py.
pub fn src_layout(project: &Path) -> Outcome {
    if !project.join("src").is_dir() {
        return Outcome::fail(
            "src/ directory not found",
            vec!["Expected: src/<package_name>/__init__.py".into()],
            "Migrate to src/ layout: move package into src/<package_name>/.",
        );
    }
    let packages = src_packages(project);
    if packages.is_empty() {
        return Outcome::fail(
            "No Python package found in src/",
            vec!["src/ exists but contains no package with __init__.py".into()],
            "Create src/<package_name>/__init__.py.",
        );
    }
    Outcome::pass(format!("src/ layout with {} package(s)", packages.len()))
}

/// py.typed marker in the package (PEP 561).
pub fn py_typed(project: &Path) -> Outcome {
    if !project.join("src").is_dir() {
        return Outcome::fail(
            "src/ directory not found",
            vec![],
            "Create src/<package_name>/py.typed marker file.",
        );
    }
    let has_marker = src_packages(project)
        .iter()
        .any(|pkg| pkg.join("py.typed").exists());
    if has_marker {
        return Outcome::pass("py.typed marker found");
    }
    Outcome::fail(
        "py.typed marker not found",
        vec!["PEP 561: py.typed marks package as providing type information".into()],
        "Create an empty src/<package_name>/py.typed file.",
    )
}

/// tests/ directory with at least one test file.
pub fn tests_dir(project: &Path) -> Outcome {
    let tests = project.join("tests");
    if !tests.is_dir() {
        return Outcome::fail(
            "tests/ directory not found",
            vec![],
            "Create tests/ directory with test files.",
        );
    }
    let test_files = WalkBuilder::new(&tests)
        .standard_filters(false)
        .build()
        .flatten()
        .filter(|entry| {
            entry.file_type().is_some_and(|ft| ft.is_file())
                && entry.file_name().to_string_lossy().starts_with("test_")
                && entry.file_name().to_string_lossy().ends_with(".py")
        })
        .count();
    if test_files == 0 {
        return Outcome::fail(
            "No test files found in tests/",
            vec!["Expected: tests/test_*.py files".into()],
            "Add test files matching test_*.py pattern.",
        );
    }
    Outcome::pass(format!("{test_files} test file(s) found"))
}

/// CONTRIBUTING.md exists.
pub fn contributing(project: &Path) -> Outcome {
    if !project.join("CONTRIBUTING.md").exists() {
        return Outcome::fail(
            "CONTRIBUTING.md not found",
            vec![],
            "Create CONTRIBUTING.md with dev setup and commit conventions.",
        );
    }
    Outcome::pass("CONTRIBUTING.md found")
}

/// LICENSE file exists.
pub fn license_file(project: &Path) -> Outcome {
    if !project.join("LICENSE").exists() {
        return Outcome::fail(
            "LICENSE file not found",
            vec![],
            "Create a LICENSE file (MIT, Apache-2.0, or EUPL-1.2).",
        );
    }
    Outcome::pass("LICENSE file found")
}

/// uv.lock is committed.
pub fn uv_lock(project: &Path) -> Outcome {
    if !project.join("uv.lock").exists() {
        return Outcome::fail(
            "uv.lock not found",
            vec!["Lockfile pins the resolved dependency set".into()],
            "Run 'uv lock' and commit uv.lock.",
        );
    }
    Outcome::pass("uv.lock found")
}

/// .python-version pins the interpreter.
pub fn python_version(project: &Path) -> Outcome {
    if !project.join(".python-version").exists() {
        return Outcome::fail(
            ".python-version not found",
            vec!["Pins the interpreter version for uv and CI".into()],
            "Create .python-version pinning the toolchain Python.",
        );
    }
    Outcome::pass(".python-version found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn src_layout_requires_a_package() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!src_layout(dir.path()).passed);

        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        let outcome = src_layout(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "No Python package found in src/");

        std::fs::create_dir_all(dir.path().join("src/demo")).unwrap();
        std::fs::write(dir.path().join("src/demo/__init__.py"), "").unwrap();
        let outcome = src_layout(dir.path());
        assert!(outcome.passed);
        assert_eq!(outcome.message, "src/ layout with 1 package(s)");
    }

    #[test]
    fn py_typed_found_in_any_package() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/demo")).unwrap();
        std::fs::write(dir.path().join("src/demo/__init__.py"), "").unwrap();
        assert!(!py_typed(dir.path()).passed);

        std::fs::write(dir.path().join("src/demo/py.typed"), "").unwrap();
        assert!(py_typed(dir.path()).passed);
    }

    #[test]
    fn tests_dir_walks_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("tests/unit/models")).unwrap();
        let outcome = tests_dir(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "No test files found in tests/");

        std::fs::write(dir.path().join("tests/unit/models/test_check.py"), "").unwrap();
        std::fs::write(dir.path().join("tests/test_cli.py"), "").unwrap();
        let outcome = tests_dir(dir.path());
        assert!(outcome.passed);
        assert_eq!(outcome.message, "2 test file(s) found");
    }

    #[test]
    fn marker_files_checked_at_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!contributing(dir.path()).passed);
        assert!(!license_file(dir.path()).passed);
        assert!(!uv_lock(dir.path()).passed);
        assert!(!python_version(dir.path()).passed);

        std::fs::write(dir.path().join("CONTRIBUTING.md"), "# Contributing\n").unwrap();
        std::fs::write(dir.path().join("LICENSE"), "MIT\n").unwrap();
        std::fs::write(dir.path().join("uv.lock"), "version = 1\n").unwrap();
        std::fs::write(dir.path().join(".python-version"), "3.12\n").unwrap();
        assert!(contributing(dir.path()).passed);
        assert!(license_file(dir.path()).passed);
        assert!(uv_lock(dir.path()).passed);
        assert!(python_version(dir.path()).passed);
    }
}
