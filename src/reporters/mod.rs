//! Output renderers for audit results.
//!
//! Three interchangeable formats consume the same [`ProjectResult`]:
//! - `human` - terminal report with per-category breakdown and failures
//! - `json` - structurally complete JSON for CI gating
//! - `agent` - condensed digest for automated callers
//!
//! Renderers never re-run checks and serialize the result explicitly, so
//! all three agree on every score, grade, and pass/fail value by
//! construction.

pub mod agent;
pub mod human;
pub mod json;

use anyhow::Result;

use crate::models::ProjectResult;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Agent,
}

/// Render a result in the chosen format.
pub fn render(result: &ProjectResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => human::render(result),
        OutputFormat::Json => json::render(result),
        OutputFormat::Agent => agent::render(result),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Category, CheckResult, ProjectResult};
    use std::path::PathBuf;

    /// A small mixed result for renderer tests.
    pub(crate) fn sample_result() -> ProjectResult {
        let checks = vec![
            CheckResult::new(
                "pyproject.exists",
                Category::Pyproject,
                4,
                true,
                "pyproject.toml found".into(),
                vec![],
                String::new(),
            ),
            CheckResult::new(
                "pyproject.urls",
                Category::Pyproject,
                3,
                false,
                "Missing 2 URL(s) in [project.urls]".into(),
                vec!["Missing: Documentation, Issues".into()],
                "Add Documentation, Issues to [project.urls] in pyproject.toml.".into(),
            ),
            CheckResult::new(
                "ci.workflow_exists",
                Category::Ci,
                5,
                false,
                "CI workflow not found".into(),
                vec!["Expected: .github/workflows/ci.yml".into()],
                "Create .github/workflows/ci.yml with lint, test, and security jobs.".into(),
            ),
        ];
        ProjectResult::from_checks(PathBuf::from("/work/demo"), checks)
    }

    #[test]
    fn formats_agree_on_score_and_grade() {
        let result = sample_result();
        let human = human::render(&result).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&json::render(&result).unwrap()).unwrap();
        let agent: serde_json::Value =
            serde_json::from_str(&agent::render(&result).unwrap()).unwrap();

        assert!(human.contains(&format!("Score: {}/100", result.score)));
        assert!(human.contains(&format!("Grade {}", result.grade)));
        assert_eq!(json["score"], result.score);
        assert_eq!(json["grade"], result.grade.as_str());
        assert_eq!(agent["score"], result.score);
        assert_eq!(agent["grade"], result.grade.as_str());
    }

    #[test]
    fn formats_agree_on_the_failure_set() {
        let result = sample_result();
        let json: serde_json::Value =
            serde_json::from_str(&json::render(&result).unwrap()).unwrap();
        let agent: serde_json::Value =
            serde_json::from_str(&agent::render(&result).unwrap()).unwrap();

        let json_failures: Vec<&str> = json["failures"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        let agent_failures: Vec<&str> = agent["failed"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        let expected: Vec<&str> = result.failures().map(|f| f.name).collect();
        assert_eq!(json_failures, expected);
        assert_eq!(agent_failures, expected);
    }
}
