//! CLI contract tests.
//!
//! Runs the built binary against temp fixtures to verify the exit-code
//! contract, format selection, and error reporting.

use std::path::Path;
use std::process::Command;

fn gilt_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gilt")
}

fn run_check(dir: &Path, extra_args: &[&str]) -> (i32, String, String) {
    let mut cmd = Command::new(gilt_bin());
    cmd.arg("check").arg(dir);
    for arg in extra_args {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("failed to run gilt");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn failing_audit_exits_one_with_human_report() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_check(dir.path(), &[]);
    assert_eq!(code, 1);
    assert!(stdout.contains("Score:"));
    assert!(stdout.contains("Failures"));
}

#[test]
fn json_output_is_valid_and_complete() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_check(dir.path(), &["--json"]);
    assert_eq!(code, 1);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(parsed["score"].is_u64());
    assert_eq!(parsed["passed"], false);
    assert_eq!(parsed["categories"]["pyproject"]["total"], 27);
    assert_eq!(parsed["categories"]["ci"]["total"], 18);
    assert!(!parsed["failures"].as_array().unwrap().is_empty());
}

#[test]
fn agent_output_is_a_single_json_line() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_check(dir.path(), &["--agent"]);
    assert_eq!(code, 1);
    assert_eq!(stdout.trim().lines().count(), 1);

    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert!(parsed["passed_count"].is_u64());
    assert!(!parsed["failed"].as_array().unwrap().is_empty());
}

#[test]
fn verbose_human_report_lists_every_check() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_check(dir.path(), &["--verbose"]);
    assert_eq!(code, 1);
    // Even passing checks appear individually in verbose mode.
    assert!(stdout.contains("✅ tooling.precommit_installed"));
    assert!(stdout.contains("❌ pyproject.exists"));
}

#[test]
fn json_and_agent_flags_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_check(dir.path(), &["--json", "--agent"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("--agent") || stderr.contains("--json"));
}

#[test]
fn unknown_category_exits_one_listing_valid_names() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_check(dir.path(), &["--category", "bogus"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("bogus"));
    for name in ["pyproject", "ci", "tooling", "docs", "structure", "deps", "changelog"] {
        assert!(stderr.contains(name), "stderr missing {name}: {stderr}");
    }
}

#[test]
fn unknown_category_in_json_mode_emits_error_object() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_check(dir.path(), &["--category", "bogus", "--json"]);
    assert_eq!(code, 1);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert!(parsed["error"].as_str().unwrap().contains("bogus"));
}

#[test]
fn missing_path_exits_one() {
    let (code, _, stderr) = run_check(Path::new("/definitely/not/a/real/path"), &[]);
    assert_eq!(code, 1);
    assert!(stderr.contains("path does not exist"));
}

#[test]
fn category_filter_restricts_scoring() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stdout, _) = run_check(dir.path(), &["--category", "ci", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["total"], 18);
    assert_eq!(parsed["earned"], 0);
    assert_eq!(parsed["categories"].as_object().unwrap().len(), 1);
    assert!(parsed["checks"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["category"] == "ci"));
}

#[test]
fn version_subcommand_reports_version() {
    let output = Command::new(gilt_bin())
        .arg("version")
        .output()
        .expect("failed to run gilt");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("gilt "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_requires_identity() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(gilt_bin())
        .arg("init")
        .arg(dir.path().join("proj"))
        .arg("--json")
        // Point the config dir somewhere empty so a developer's own
        // config cannot satisfy the identity lookup.
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("failed to run gilt");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert!(parsed["error"].as_str().unwrap().contains("org, author, and email"));
}

#[test]
fn reserve_dry_run_handles_offline_gracefully() {
    // Whatever the network state, a dry run must exit cleanly with a
    // structured result: success JSON when PyPI answered, an availability
    // failure otherwise. It must never publish or hang.
    let output = Command::new(gilt_bin())
        .args(["reserve", "gilt-test-package-name-that-should-not-exist", "--dry-run", "--json"])
        .output()
        .expect("failed to run gilt");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    match output.status.code() {
        Some(0) => {
            assert_eq!(parsed["success"], true);
            assert!(parsed["message"].as_str().unwrap().contains("Dry run"));
        }
        Some(1) => {
            assert_eq!(parsed["success"], false);
        }
        other => panic!("unexpected exit status {other:?}"),
    }
}
