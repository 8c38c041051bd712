//! Check engine: runs the catalog against a project and aggregates scores.
//!
//! Checks are independent pure functions, so they run in parallel; the
//! indexed collect restores catalog order before aggregation. A check that
//! panics is converted into a failing result so one broken check never
//! aborts the run.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::checks::{CheckSpec, CATALOG};
use crate::models::{Category, CheckResult, ProjectResult};

/// Input errors that abort a run before any check executes.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("path does not exist or is not a directory: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Unknown category '{given}'. Valid: {valid}")]
    UnknownCategory { given: String, valid: String },
}

/// Orchestrates project checks and produces a [`ProjectResult`].
pub struct CheckEngine {
    project_path: PathBuf,
    category: Option<String>,
}

impl CheckEngine {
    pub fn new(project_path: impl Into<PathBuf>, category: Option<String>) -> Self {
        Self {
            project_path: project_path.into(),
            category,
        }
    }

    /// Run all checks (or the filtered category) and return the result.
    pub fn run(&self) -> Result<ProjectResult, EngineError> {
        let project_path = self
            .project_path
            .canonicalize()
            .ok()
            .filter(|p| p.is_dir())
            .ok_or_else(|| EngineError::PathNotFound(self.project_path.clone()))?;

        let selected = self.select_checks()?;
        debug!(checks = selected.len(), path = %project_path.display(), "running audit");
        let started = Instant::now();

        let results: Vec<CheckResult> = selected
            .par_iter()
            .map(|spec| run_isolated(spec, &project_path))
            .collect();

        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "audit complete");
        Ok(ProjectResult::from_checks(project_path, results))
    }

    fn select_checks(&self) -> Result<Vec<&'static CheckSpec>, EngineError> {
        match &self.category {
            Some(name) => {
                let category = Category::from_name(name).ok_or_else(|| {
                    EngineError::UnknownCategory {
                        given: name.clone(),
                        valid: Category::valid_names(),
                    }
                })?;
                Ok(CATALOG.iter().filter(|s| s.category == category).collect())
            }
            None => Ok(CATALOG.iter().collect()),
        }
    }
}

/// Run one check, converting a panic into a failing result. The catalog
/// entry keeps the identity and weight, so attribution survives a broken
/// check body.
fn run_isolated(spec: &CheckSpec, project: &Path) -> CheckResult {
    catch_unwind(AssertUnwindSafe(|| spec.execute(project))).unwrap_or_else(|_| {
        CheckResult::new(
            spec.name,
            spec.category,
            spec.weight,
            false,
            "Internal error while running check".into(),
            vec![],
            "Re-run with RUST_LOG=debug and report this as a gilt bug.".into(),
        )
    })
}
