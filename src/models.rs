//! Core data models for gilt audits and workflows.
//!
//! Audit results are immutable value objects built once per invocation:
//! every run constructs a fresh [`ProjectResult`] from the check outcomes
//! and nothing is cached or mutated afterwards. Reporters consume these
//! models read-only and serialize them explicitly.

use std::fmt;
use std::path::PathBuf;

/// Gold-standard letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a 0-100 score to a grade.
    ///
    /// Boundaries are fixed constants: A ≥ 90, B ≥ 75, C ≥ 60, D ≥ 40,
    /// F below that.
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Grade::A,
            75..=89 => Grade::B,
            60..=74 => Grade::C,
            40..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of checks sharing a point budget.
///
/// The set is closed and the declaration order here is the catalog order:
/// results, category breakdowns, and every rendering follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pyproject,
    Ci,
    Tooling,
    Docs,
    Structure,
    Deps,
    Changelog,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Category; 7] = [
        Category::Pyproject,
        Category::Ci,
        Category::Tooling,
        Category::Docs,
        Category::Structure,
        Category::Deps,
        Category::Changelog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pyproject => "pyproject",
            Category::Ci => "ci",
            Category::Tooling => "tooling",
            Category::Docs => "docs",
            Category::Structure => "structure",
            Category::Deps => "deps",
            Category::Changelog => "changelog",
        }
    }

    /// Parse a category name. Returns `None` for anything outside the
    /// closed set; the caller decides how to report valid names.
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    /// Comma-separated list of valid names, for error messages and help.
    pub fn valid_names() -> String {
        Category::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single audit check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Stable catalog key, e.g. `pyproject.exists`.
    pub name: &'static str,
    pub category: Category,
    pub passed: bool,
    /// Points this check is worth. Always positive.
    pub weight: u32,
    /// Short human summary of what was found.
    pub message: String,
    /// Supporting detail lines (missing items, found items).
    pub details: Vec<String>,
    /// Actionable remediation. Non-empty exactly when the check failed.
    pub fix: String,
}

impl CheckResult {
    pub(crate) fn new(
        name: &'static str,
        category: Category,
        weight: u32,
        passed: bool,
        message: String,
        details: Vec<String>,
        fix: String,
    ) -> Self {
        debug_assert!(weight > 0, "check {name} has zero weight");
        debug_assert!(
            passed == fix.is_empty(),
            "check {name}: fix must be non-empty exactly when failed"
        );
        Self {
            name,
            category,
            passed,
            weight,
            message,
            details,
            fix,
        }
    }

    /// Points earned: the full weight if passed, zero otherwise.
    pub fn earned(&self) -> u32 {
        if self.passed {
            self.weight
        } else {
            0
        }
    }
}

/// Aggregated score for one category.
#[derive(Debug, Clone)]
pub struct CategoryScore {
    pub category: Category,
    pub earned: u32,
    pub total: u32,
}

impl CategoryScore {
    /// Build from the checks belonging to this category. The total is the
    /// sum of the constituent weights; nothing else defines a budget.
    pub fn from_checks(category: Category, checks: &[&CheckResult]) -> Self {
        Self {
            category,
            earned: checks.iter().map(|c| c.earned()).sum(),
            total: checks.iter().map(|c| c.weight).sum(),
        }
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            f64::from(self.earned) / f64::from(self.total) * 100.0
        }
    }
}

/// Complete audit result for one invocation.
#[derive(Debug, Clone)]
pub struct ProjectResult {
    pub project_path: PathBuf,
    /// Every check that ran, in catalog order.
    pub checks: Vec<CheckResult>,
    /// Per-category breakdowns for the categories that ran, catalog order.
    pub categories: Vec<CategoryScore>,
    pub earned: u32,
    pub total: u32,
    /// Normalized 0-100 score.
    pub score: u8,
    pub grade: Grade,
    /// True exactly when every executed check passed.
    pub passed: bool,
}

impl ProjectResult {
    /// Aggregate check results into the full scored outcome.
    pub fn from_checks(project_path: PathBuf, checks: Vec<CheckResult>) -> Self {
        let earned: u32 = checks.iter().map(|c| c.earned()).sum();
        let total: u32 = checks.iter().map(|c| c.weight).sum();
        let score = normalize_score(earned, total);

        let categories: Vec<CategoryScore> = Category::ALL
            .iter()
            .filter_map(|cat| {
                let members: Vec<&CheckResult> =
                    checks.iter().filter(|c| c.category == *cat).collect();
                if members.is_empty() {
                    None
                } else {
                    Some(CategoryScore::from_checks(*cat, &members))
                }
            })
            .collect();

        Self {
            project_path,
            passed: earned == total,
            grade: Grade::from_score(score),
            checks,
            categories,
            earned,
            total,
            score,
        }
    }

    /// Failing checks, in catalog order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }

    pub fn category_score(&self, category: Category) -> Option<&CategoryScore> {
        self.categories.iter().find(|cs| cs.category == category)
    }
}

/// Normalize earned/total points to a 0-100 score.
///
/// Round-half-up, computed once on the overall ratio in integer
/// arithmetic. A score of 100 is reserved for a perfect run so that
/// `score == 100` always means every check passed; an empty selection
/// passes vacuously.
fn normalize_score(earned: u32, total: u32) -> u8 {
    if total == 0 || earned >= total {
        return 100;
    }
    let rounded = (200 * u64::from(earned) + u64::from(total)) / (2 * u64::from(total));
    rounded.min(99) as u8
}

/// Result of a scaffolding operation.
#[derive(Debug, Clone)]
pub struct ScaffoldResult {
    pub success: bool,
    pub path: PathBuf,
    pub message: String,
    /// Paths created, relative to the destination, sorted.
    pub files_created: Vec<String>,
}

/// Result of a PyPI name reservation.
#[derive(Debug, Clone)]
pub struct ReserveResult {
    pub success: bool,
    pub package_name: String,
    pub version: String,
    pub message: String,
}
