use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::domain::Project;
use crate::error::{Result, TryReleaseError};

const CONFIG_FILE_NAME: &str = "tryrelease.toml";
const MAX_TIMEOUT_SECS: u64 = 3600;

/// Represents the complete configuration for tryrelease.
///
/// Names the project whose releases are checked and how the release API is reached.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

fn default_owner() -> String {
    "marco-m".to_string()
}

fn default_repo() -> String {
    "tryrelease".to_string()
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

/// The `owner/repo` whose latest release is compared against the installed build.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectConfig {
    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_repo")]
    pub repo: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            owner: default_owner(),
            repo: default_repo(),
        }
    }
}

impl ProjectConfig {
    pub fn project(&self) -> Project {
        Project::new(&self.owner, &self.repo)
    }
}

/// Settings for the release API endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding an optional bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token_env: default_token_env(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads the token from the configured environment variable, ignoring empty values
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

impl Config {
    fn validate(self) -> Result<Self> {
        if self.project.owner.trim().is_empty() || self.project.repo.trim().is_empty() {
            return Err(TryReleaseError::config(
                "project owner and repo must not be empty",
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(TryReleaseError::config("api timeout_secs must be positive"));
        }
        if self.api.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(TryReleaseError::config(format!(
                "api timeout_secs must be at most {}",
                MAX_TIMEOUT_SECS
            )));
        }
        Ok(self)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tryrelease.toml` in current directory
/// 3. `tryrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed, or holds invalid values
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses and validates a TOML configuration document.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| TryReleaseError::config(e.to_string()))?;
    config.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.project.owner, "marco-m");
        assert_eq!(config.project.repo, "tryrelease");
        assert_eq!(config.api.base_url, "https://api.github.com");
        assert_eq!(config.api.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config("[project]\nrepo = \"other\"\n").unwrap();
        assert_eq!(config.project.owner, "marco-m");
        assert_eq!(config.project.repo, "other");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_empty_owner() {
        let err = parse_config("[project]\nowner = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!(parse_config("[api]\ntimeout_secs = 0\n").is_err());
    }

    #[test]
    fn test_timeout_upper_bound() {
        assert_eq!(
            parse_config("[api]\ntimeout_secs = 3600\n")
                .unwrap()
                .api
                .timeout_secs,
            3600
        );

        let err = parse_config("[api]\ntimeout_secs = 3601\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: api timeout_secs must be at most 3600"
        );

        let err = parse_config("[api]\ntimeout_secs = 9223372036854775807\n").unwrap_err();
        assert!(matches!(err, TryReleaseError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = parse_config("[project\n").unwrap_err();
        assert!(matches!(err, TryReleaseError::Config(_)));
    }

    #[test]
    fn test_token_unset_variable() {
        let api = ApiConfig {
            token_env: "TRYRELEASE_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.token(), None);
    }
}
