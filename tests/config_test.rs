// tests/config_test.rs
use issue_branch::config::{load_config, Config, PatternsConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.patterns.branch_format, "issue-{number}-{slug}");
    assert_eq!(config.patterns.commit_format, "Fixes #{number} {description}");
    assert!(!config.behavior.verbose);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[patterns]
branch_format = "bug/{number}/{slug}"

[behavior]
verbose = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.patterns.branch_format, "bug/{number}/{slug}");
    // Unset keys keep their defaults
    assert_eq!(config.patterns.commit_format, "Fixes #{number} {description}");
    assert!(config.behavior.verbose);
}

#[test]
fn test_load_missing_custom_path_fails() {
    let result = load_config(Some("/nonexistent/issuebranch.toml"));
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Configuration error"));
}

#[test]
fn test_load_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"patterns = not valid toml").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
fn test_patterns_config_default() {
    let patterns = PatternsConfig::default();
    assert!(patterns.branch_format.contains("{number}"));
    assert!(patterns.branch_format.contains("{slug}"));
    assert!(patterns.commit_format.contains("{description}"));
}
