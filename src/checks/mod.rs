//! The gold-standard check catalog.
//!
//! Every check is a pure function over the project root: read-only
//! filesystem access, no network, no dependence on any other check. A
//! check always produces exactly one outcome; when a prerequisite file is
//! missing it fails naming the prerequisite rather than being skipped.
//!
//! Identity, category, and weight are fixed catalog metadata carried by
//! [`CheckSpec`], not computed by the check body. The [`CATALOG`] table is
//! the single source of truth for order and for every point budget.

pub mod changelog;
pub mod ci;
pub mod deps;
pub mod docs;
pub mod pyproject;
pub mod structure;
pub mod tooling;

use std::path::Path;

use crate::models::{Category, CheckResult};

/// What one check body observed, before catalog identity is attached.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub passed: bool,
    pub message: String,
    pub details: Vec<String>,
    pub fix: String,
}

impl Outcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            details: Vec::new(),
            fix: String::new(),
        }
    }

    pub fn fail(
        message: impl Into<String>,
        details: Vec<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            passed: false,
            message: message.into(),
            details,
            fix: fix.into(),
        }
    }
}

/// One catalog entry: fixed identity plus the check body.
pub struct CheckSpec {
    /// Stable key, `<category>.<check>`.
    pub name: &'static str,
    pub category: Category,
    pub weight: u32,
    pub run: fn(&Path) -> Outcome,
}

impl CheckSpec {
    /// Run the check body and attach this entry's identity to the outcome.
    pub fn execute(&self, project: &Path) -> CheckResult {
        let outcome = (self.run)(project);
        CheckResult::new(
            self.name,
            self.category,
            self.weight,
            outcome.passed,
            outcome.message,
            outcome.details,
            outcome.fix,
        )
    }
}

/// The full catalog, in the order checks run and report.
pub const CATALOG: &[CheckSpec] = &[
    // pyproject
    CheckSpec { name: "pyproject.exists", category: Category::Pyproject, weight: 4, run: pyproject::exists },
    CheckSpec { name: "pyproject.urls", category: Category::Pyproject, weight: 3, run: pyproject::urls },
    CheckSpec { name: "pyproject.dynamic_version", category: Category::Pyproject, weight: 3, run: pyproject::dynamic_version },
    CheckSpec { name: "pyproject.mypy", category: Category::Pyproject, weight: 3, run: pyproject::mypy },
    CheckSpec { name: "pyproject.ruff", category: Category::Pyproject, weight: 3, run: pyproject::ruff },
    CheckSpec { name: "pyproject.pytest", category: Category::Pyproject, weight: 4, run: pyproject::pytest },
    CheckSpec { name: "pyproject.coverage", category: Category::Pyproject, weight: 4, run: pyproject::coverage },
    CheckSpec { name: "pyproject.classifiers", category: Category::Pyproject, weight: 1, run: pyproject::classifiers },
    CheckSpec { name: "pyproject.ruff_rules", category: Category::Pyproject, weight: 2, run: pyproject::ruff_rules },
    // ci
    CheckSpec { name: "ci.workflow_exists", category: Category::Ci, weight: 5, run: ci::workflow_exists },
    CheckSpec { name: "ci.lint_job", category: Category::Ci, weight: 3, run: ci::lint_job },
    CheckSpec { name: "ci.test_job", category: Category::Ci, weight: 3, run: ci::test_job },
    CheckSpec { name: "ci.security_job", category: Category::Ci, weight: 2, run: ci::security_job },
    CheckSpec { name: "ci.coverage_upload", category: Category::Ci, weight: 2, run: ci::coverage_upload },
    CheckSpec { name: "ci.trusted_publishing", category: Category::Ci, weight: 2, run: ci::trusted_publishing },
    CheckSpec { name: "ci.dependabot", category: Category::Ci, weight: 1, run: ci::dependabot },
    // tooling
    CheckSpec { name: "tooling.precommit_exists", category: Category::Tooling, weight: 3, run: tooling::precommit_exists },
    CheckSpec { name: "tooling.precommit_ruff", category: Category::Tooling, weight: 2, run: tooling::precommit_ruff },
    CheckSpec { name: "tooling.precommit_mypy", category: Category::Tooling, weight: 2, run: tooling::precommit_mypy },
    CheckSpec { name: "tooling.precommit_conventional", category: Category::Tooling, weight: 2, run: tooling::precommit_conventional },
    CheckSpec { name: "tooling.precommit_basic", category: Category::Tooling, weight: 1, run: tooling::precommit_basic },
    CheckSpec { name: "tooling.precommit_installed", category: Category::Tooling, weight: 2, run: tooling::precommit_installed },
    CheckSpec { name: "tooling.makefile", category: Category::Tooling, weight: 4, run: tooling::makefile },
    // docs
    CheckSpec { name: "docs.mkdocs_exists", category: Category::Docs, weight: 3, run: docs::mkdocs_exists },
    CheckSpec { name: "docs.diataxis_nav", category: Category::Docs, weight: 3, run: docs::diataxis_nav },
    CheckSpec { name: "docs.plugins", category: Category::Docs, weight: 3, run: docs::plugins },
    CheckSpec { name: "docs.gen_ref_pages", category: Category::Docs, weight: 2, run: docs::gen_ref_pages },
    CheckSpec { name: "docs.readme", category: Category::Docs, weight: 3, run: docs::readme },
    // structure
    CheckSpec { name: "structure.src_layout", category: Category::Structure, weight: 5, run: structure::src_layout },
    CheckSpec { name: "structure.py_typed", category: Category::Structure, weight: 2, run: structure::py_typed },
    CheckSpec { name: "structure.tests_dir", category: Category::Structure, weight: 3, run: structure::tests_dir },
    CheckSpec { name: "structure.contributing", category: Category::Structure, weight: 2, run: structure::contributing },
    CheckSpec { name: "structure.license", category: Category::Structure, weight: 3, run: structure::license_file },
    CheckSpec { name: "structure.uv_lock", category: Category::Structure, weight: 2, run: structure::uv_lock },
    CheckSpec { name: "structure.python_version", category: Category::Structure, weight: 2, run: structure::python_version },
    // deps
    CheckSpec { name: "deps.dev_group", category: Category::Deps, weight: 3, run: deps::dev_group },
    CheckSpec { name: "deps.docs_group", category: Category::Deps, weight: 2, run: deps::docs_group },
    // changelog
    CheckSpec { name: "changelog.gitcliff", category: Category::Changelog, weight: 3, run: changelog::gitcliff },
    CheckSpec { name: "changelog.no_manual", category: Category::Changelog, weight: 2, run: changelog::no_manual },
];

/// Checks belonging to one category, in catalog order.
pub fn checks_for(category: Category) -> impl Iterator<Item = &'static CheckSpec> {
    CATALOG.iter().filter(move |s| s.category == category)
}

/// A category's point budget: the sum of its checks' weights.
pub fn category_total(category: Category) -> u32 {
    checks_for(category).map(|s| s.weight).sum()
}

/// The full catalog's point budget.
pub fn grand_total() -> u32 {
    CATALOG.iter().map(|s| s.weight).sum()
}

/// Load and parse `pyproject.toml`, or `None` if missing or unparsable.
/// The two cases are distinguished only by `pyproject.exists`; every other
/// check treats them the same.
pub(crate) fn load_pyproject(project: &Path) -> Option<toml::Value> {
    let content = std::fs::read_to_string(project.join("pyproject.toml")).ok()?;
    content.parse::<toml::Value>().ok()
}

/// Read a file under the project root, or `None` if missing or unreadable.
pub(crate) fn read_project_file(project: &Path, rel: &str) -> Option<String> {
    std::fs::read_to_string(project.join(rel)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique_and_prefixed_by_category() {
        let mut seen = std::collections::HashSet::new();
        for spec in CATALOG {
            assert!(seen.insert(spec.name), "duplicate check name {}", spec.name);
            let prefix = format!("{}.", spec.category);
            assert!(
                spec.name.starts_with(&prefix),
                "{} not prefixed by its category",
                spec.name
            );
        }
    }

    #[test]
    fn catalog_weights_are_positive() {
        for spec in CATALOG {
            assert!(spec.weight > 0, "{} has zero weight", spec.name);
        }
    }

    #[test]
    fn category_budgets_sum_to_grand_total() {
        let sum: u32 = Category::ALL.iter().map(|c| category_total(*c)).sum();
        assert_eq!(sum, grand_total());
        assert_eq!(grand_total(), 104);
    }

    #[test]
    fn every_category_has_checks() {
        for cat in Category::ALL {
            assert!(checks_for(cat).count() > 0, "{cat} has no checks");
        }
    }

    #[test]
    fn catalog_is_grouped_by_category_in_order() {
        // Checks of one category are contiguous and categories appear in
        // Category::ALL order, so filtered and unfiltered runs agree on
        // relative order.
        let firsts: Vec<Category> = CATALOG
            .iter()
            .map(|s| s.category)
            .fold(Vec::new(), |mut acc, c| {
                if acc.last() != Some(&c) {
                    acc.push(c);
                }
                acc
            });
        assert_eq!(firsts, Category::ALL.to_vec());
    }

    #[test]
    fn load_pyproject_handles_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_pyproject(dir.path()).is_none());

        std::fs::write(dir.path().join("pyproject.toml"), "not [ valid").unwrap();
        assert!(load_pyproject(dir.path()).is_none());

        std::fs::write(dir.path().join("pyproject.toml"), "[project]\nname = \"x\"\n").unwrap();
        let data = load_pyproject(dir.path()).unwrap();
        assert_eq!(
            data.get("project").and_then(|p| p.get("name")).and_then(|n| n.as_str()),
            Some("x")
        );
    }
}
