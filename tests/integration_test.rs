// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_issue_branch_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "issue-branch", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("issue-branch"));
    assert!(stdout.contains("--copy-only"));
    assert!(stdout.contains("--title-only"));
}

#[test]
fn test_missing_title_fails_before_processing() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "issue-branch", "--"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage") || stderr.contains("required"));
}

#[test]
fn test_dry_run_previews_branch_creation() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "issue-branch",
            "--",
            "Fix login bug #42",
            "--dry-run",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("issue-42-fix-login-bug"));
    assert!(stdout.contains("Fixes #42 Fix login bug"));
}

#[test]
fn test_dry_run_copy_only_previews_branch_name_only() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--bin",
            "issue-branch",
            "--",
            "Fix login bug #42",
            "--copy-only",
            "--dry-run",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("issue-42-fix-login-bug"));
    assert!(!stdout.contains("Fixes #42"));
}

#[test]
fn test_malformed_title_reports_unified_error() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "issue-branch", "--", "no issue number here"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to parse github title"));
}

#[test]
fn test_title_parsing_through_library() {
    use issue_branch::config::PatternsConfig;
    use issue_branch::title::ParsedTitle;

    let parsed = ParsedTitle::parse("Handle special!!chars??#7", &PatternsConfig::default())
        .expect("Should parse");
    assert_eq!(parsed.issue_number, "7");
    assert_eq!(parsed.slug_description, "handle special chars");
    assert_eq!(parsed.branch_name, "issue-7-handle-special-chars");
}
