//! Condensed digest for automated callers.
//!
//! Passing checks collapse to a count; failures keep full remediation
//! detail so a caller can act without re-running the audit.

use anyhow::Result;
use serde_json::json;

use crate::models::ProjectResult;

/// Render the compact single-line JSON digest.
pub fn render(result: &ProjectResult) -> Result<String> {
    let value = json!({
        "score": result.score,
        "grade": result.grade.as_str(),
        "passed_count": result.checks.iter().filter(|c| c.passed).count(),
        "failed": result.failures().map(|f| json!({
            "name": f.name,
            "message": f.message,
            "details": f.details,
            "fix": f.fix,
        })).collect::<Vec<_>>(),
    });
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::sample_result;

    #[test]
    fn digest_is_single_line_and_counts_passes() {
        let rendered = render(&sample_result()).unwrap();
        assert!(!rendered.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["passed_count"], 1);
        assert_eq!(parsed["failed"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn failures_keep_remediation_detail() {
        let parsed: serde_json::Value =
            serde_json::from_str(&render(&sample_result()).unwrap()).unwrap();
        let first = &parsed["failed"][0];
        assert_eq!(first["name"], "pyproject.urls");
        assert!(!first["details"].as_array().unwrap().is_empty());
        assert!(!first["fix"].as_str().unwrap().is_empty());
    }
}
