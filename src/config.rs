use crate::classifier::SUPPORTED_KEYS;
use crate::error::{CommitlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for commitlog, loaded from `commitlog.toml`.
///
/// Every field has a default so the tool works without any file present.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

/// Defaults for changelog generation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    /// Category keys rendered in output, joined by `|` or `,`
    #[serde(default = "default_inclusions")]
    pub inclusions: String,

    /// Skip classification and emit a single unclassified list
    #[serde(default)]
    pub skip_classification: bool,
}

fn default_inclusions() -> String {
    format!("{}|other", SUPPORTED_KEYS)
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            inclusions: default_inclusions(),
            skip_classification: false,
        }
    }
}

/// Defaults for release computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Name of the version-counter file
    #[serde(default = "default_release_file")]
    pub file: String,
}

fn default_release_file() -> String {
    crate::release::VERSION_FILE.to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            file: default_release_file(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog: ChangelogConfig::default(),
            release: ReleaseConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commitlog.toml` in the current directory
/// 3. `.commitlog.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./commitlog.toml").exists() {
        fs::read_to_string("./commitlog.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".commitlog.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| CommitlogError::config(e.to_string()))
}
