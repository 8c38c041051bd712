//! Machine-readable JSON report.
//!
//! Structurally complete: path, score, grade, per-category earned/total,
//! every check outcome, and full failure detail. Intended for CI gating
//! (`jq '.score >= 90'` style) and external badge/history tooling.

use anyhow::Result;
use serde_json::{json, Map, Value};

use crate::models::ProjectResult;

/// Render the full result as pretty-printed JSON.
pub fn render(result: &ProjectResult) -> Result<String> {
    let categories: Map<String, Value> = result
        .categories
        .iter()
        .map(|cs| {
            (
                cs.category.to_string(),
                json!({ "earned": cs.earned, "total": cs.total }),
            )
        })
        .collect();

    let value = json!({
        "project": result.project_path.display().to_string(),
        "score": result.score,
        "grade": result.grade.as_str(),
        "passed": result.passed,
        "earned": result.earned,
        "total": result.total,
        "categories": categories,
        "checks": result.checks.iter().map(|c| json!({
            "name": c.name,
            "category": c.category.as_str(),
            "passed": c.passed,
            "earned": c.earned(),
            "weight": c.weight,
            "message": c.message,
        })).collect::<Vec<_>>(),
        "failures": result.failures().map(|f| json!({
            "name": f.name,
            "weight": f.weight,
            "message": f.message,
            "details": f.details,
            "fix": f.fix,
        })).collect::<Vec<_>>(),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render an engine-level error as a JSON object, for `--json`/`--agent`
/// consumers that expect JSON on stdout even on failure.
pub fn render_error(message: &str) -> String {
    json!({ "error": message }).to_string()
}
