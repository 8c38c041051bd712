//! Human-readable terminal report.

use anyhow::Result;
use console::style;

use crate::models::{Grade, ProjectResult};

fn grade_emoji(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "🏆",
        Grade::B => "✅",
        Grade::C => "⚠️",
        Grade::D => "🔧",
        Grade::F => "❌",
    }
}

/// Render the compact report: passed checks summarized per category,
/// failures detailed inline and expanded again in the trailing Failures
/// section, everything in catalog order.
pub fn render(result: &ProjectResult) -> Result<String> {
    render_opts(result, false)
}

/// Render with every individual check listed, not just failures.
pub fn render_verbose(result: &ProjectResult) -> Result<String> {
    render_opts(result, true)
}

fn render_opts(result: &ProjectResult, verbose: bool) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();

    let name = result
        .project_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| result.project_path.display().to_string());
    lines.push(format!("📋 gilt check — {name}"));
    lines.push(format!("   Path: {}", result.project_path.display()));
    lines.push(String::new());

    for cat_score in &result.categories {
        let members: Vec<_> = result
            .checks
            .iter()
            .filter(|c| c.category == cat_score.category)
            .collect();
        let passed_count = members.iter().filter(|c| c.passed).count();

        lines.push(format!(
            "  {} ({}/{})",
            style(cat_score.category).bold(),
            cat_score.earned,
            cat_score.total
        ));
        if verbose {
            for check in &members {
                let glyph = if check.passed { "✅" } else { "❌" };
                lines.push(format!(
                    "    {glyph} {:<30} {:>5}  {}",
                    check.name,
                    format!("{}/{}", check.earned(), check.weight),
                    check.message
                ));
            }
        } else {
            if passed_count > 0 {
                lines.push(format!("    ✅ {passed_count} checks passed"));
            }
            for check in members.iter().filter(|c| !c.passed) {
                lines.push(format!(
                    "    ❌ {:<30} {:>5}  {}",
                    check.name,
                    format!("{}/{}", check.earned(), check.weight),
                    check.message
                ));
            }
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "  Score: {}/100 — Grade {} {}",
        style(result.score).bold(),
        style(result.grade).bold(),
        grade_emoji(result.grade)
    ));
    lines.push(String::new());

    let failures: Vec<_> = result.failures().collect();
    if !failures.is_empty() {
        lines.push(format!("  📝 Failures ({}):", failures.len()));
        lines.push(String::new());
        for failure in failures {
            lines.push(format!("  ❌ {} ({} pts)", failure.name, failure.weight));
            lines.push(format!("     Problem: {}", failure.message));
            for detail in &failure.details {
                lines.push(format!("     {detail}"));
            }
            lines.push(format!("     Fix:     {}", failure.fix));
            lines.push(String::new());
        }
    }

    Ok(lines.join("\n"))
}
