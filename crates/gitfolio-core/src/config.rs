// SPDX-License-Identifier: Apache-2.0

//! Configuration management for gitfolio.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `GITFOLIO_`)
//! 2. Config file: `~/.config/gitfolio/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Override the username via environment variable
//! GITFOLIO_GITHUB__USERNAME=octocat gitfolio list
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::FolioError;

/// Placeholder username shipped as the built-in default.
///
/// The lister refuses to hit the network while the configured username still
/// equals this value and shows an instructional message instead.
pub const PLACEHOLDER_USERNAME: &str = "my-github-username";

/// Default base URL for the GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default number of cards shown.
pub const DEFAULT_DISPLAY_LIMIT: usize = 6;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// Display settings for the rendered portfolio.
    pub display: DisplayConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Account whose public repositories are listed.
    pub username: String,
    /// Base URL of the REST API. Overridable so tests can point at a local
    /// server; production use never changes this.
    pub api_base: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: PLACEHOLDER_USERNAME.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl GitHubConfig {
    /// Returns true if the username is still the shipped placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.username == PLACEHOLDER_USERNAME
    }
}

/// Display settings for the rendered portfolio.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum number of cards shown.
    pub limit: usize,
    /// Include repositories that are forks.
    pub show_forks: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_DISPLAY_LIMIT,
            show_forks: false,
        }
    }
}

/// Returns the gitfolio configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/gitfolio`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("gitfolio");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("gitfolio")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `GITFOLIO_` and double underscore
/// for nested keys (e.g., `GITFOLIO_GITHUB__USERNAME`).
///
/// # Errors
///
/// Returns `FolioError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, FolioError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("GITFOLIO")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_placeholder_username() {
        let config = AppConfig::default();
        assert_eq!(config.github.username, PLACEHOLDER_USERNAME);
        assert!(config.github.is_placeholder());
        assert_eq!(config.github.api_base, DEFAULT_API_BASE);
        assert_eq!(config.display.limit, 6);
        assert!(!config.display.show_forks);
    }

    #[test]
    fn configured_username_is_not_placeholder() {
        let github = GitHubConfig {
            username: "octocat".to_string(),
            ..GitHubConfig::default()
        };
        assert!(!github.is_placeholder());
    }

    #[test]
    fn config_file_path_ends_with_toml() {
        let path = config_file_path();
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn parses_toml_overrides() {
        let config_str = r#"
[github]
username = "octocat"

[display]
limit = 12
show_forks = true
"#;

        let config = Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");

        assert_eq!(app_config.github.username, "octocat");
        assert_eq!(app_config.github.api_base, DEFAULT_API_BASE);
        assert_eq!(app_config.display.limit, 12);
        assert!(app_config.display.show_forks);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config_str = r#"
[github]
username = "octocat"
"#;

        let config = Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");

        assert_eq!(app_config.github.username, "octocat");
        assert_eq!(app_config.display.limit, DEFAULT_DISPLAY_LIMIT);
        assert!(!app_config.display.show_forks);
    }
}
