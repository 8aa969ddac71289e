use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{IssueBranchError, Result};

/// Represents the complete configuration for issue-branch.
///
/// Contains the format patterns for derived strings and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub patterns: PatternsConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default branch name pattern.
fn default_branch_format() -> String {
    "issue-{number}-{slug}".to_string()
}

/// Returns the default commit message pattern.
fn default_commit_format() -> String {
    "Fixes #{number} {description}".to_string()
}

/// Format patterns for the derived strings.
///
/// `{number}` is the issue number, `{slug}` the hyphenated slug, and
/// `{description}` the original (un-slugged) description.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PatternsConfig {
    #[serde(default = "default_branch_format")]
    pub branch_format: String,

    #[serde(default = "default_commit_format")]
    pub commit_format: String,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        PatternsConfig {
            branch_format: default_branch_format(),
            commit_format: default_commit_format(),
        }
    }
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior without affecting string derivation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub verbose: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `issuebranch.toml` in current directory
/// 3. `.issuebranch.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A custom path that cannot be read is an error; the fallback locations
/// are optional.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| IssueBranchError::config(format!("cannot read '{}': {}", path, e)))?
    } else if Path::new("./issuebranch.toml").exists() {
        fs::read_to_string("./issuebranch.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".issuebranch.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| IssueBranchError::config(format!("invalid configuration: {}", e)))
}
