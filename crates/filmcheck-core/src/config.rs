// Rust guideline compliant 2026-02-06

//! Configuration management for Film Checker.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses a format name (`json`, `table` or `plain`).
    ///
    /// # Errors
    ///
    /// Returns an error for unknown format names.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "plain" => Ok(OutputFormat::Plain),
            other => Err(Error::InvalidConfig(format!(
                "output format must be json, table, or plain, got {}",
                other
            ))),
        }
    }

    /// Returns the format name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Configuration for Film Checker behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GraphQL endpoint serving title and person details.
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Base URL of the suggestion endpoint.
    #[serde(default = "default_suggestion_url")]
    pub suggestion_url: String,

    /// Path segment placed between the suggestion base URL and the query.
    #[serde(default = "default_suggestion_bucket")]
    pub suggestion_bucket: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of directors, writers and cast members to fetch.
    #[serde(default = "default_credit_limit")]
    pub credit_limit: u32,

    /// Default output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_graphql_url() -> String {
    "https://graph.imdbapi.dev/v1".to_string()
}

fn default_suggestion_url() -> String {
    "https://v3.sg.media-imdb.com/suggestion".to_string()
}

fn default_suggestion_bucket() -> String {
    "x".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_credit_limit() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_url: default_graphql_url(),
            suggestion_url: default_suggestion_url(),
            suggestion_bucket: default_suggestion_bucket(),
            timeout_secs: default_timeout_secs(),
            credit_limit: default_credit_limit(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, when given
    /// 3. Environment variables with `FILMCHECK_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Optional path to a TOML configuration file
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A path is given but the file cannot be read
    /// - The file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML configuration file without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!("{}: {}", path.display(), e))
        })
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FILMCHECK_GRAPHQL_URL` - Detail endpoint URL
    /// - `FILMCHECK_SUGGESTION_URL` - Suggestion endpoint base URL
    /// - `FILMCHECK_SUGGESTION_BUCKET` - Suggestion path segment
    /// - `FILMCHECK_TIMEOUT_SECS` - Request timeout in seconds
    /// - `FILMCHECK_CREDIT_LIMIT` - Credits fetched per category
    /// - `FILMCHECK_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FILMCHECK_GRAPHQL_URL") {
            self.graphql_url = val;
        }

        if let Ok(val) = std::env::var("FILMCHECK_SUGGESTION_URL") {
            self.suggestion_url = val;
        }

        if let Ok(val) = std::env::var("FILMCHECK_SUGGESTION_BUCKET") {
            self.suggestion_bucket = val;
        }

        if let Ok(val) = std::env::var("FILMCHECK_TIMEOUT_SECS") {
            self.timeout_secs = val.parse().map_err(|_| {
                Error::InvalidConfig("FILMCHECK_TIMEOUT_SECS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FILMCHECK_CREDIT_LIMIT") {
            self.credit_limit = val.parse().map_err(|_| {
                Error::InvalidConfig("FILMCHECK_CREDIT_LIMIT must be a number 1-50".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FILMCHECK_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val)?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - an endpoint URL does not parse
    /// - the suggestion bucket is empty or contains `/`
    /// - timeout_secs is zero
    /// - credit_limit is outside 1-50
    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("graphql_url", &self.graphql_url),
            ("suggestion_url", &self.suggestion_url),
        ] {
            Url::parse(value)
                .map_err(|e| Error::InvalidConfig(format!("{} is not a valid URL: {}", key, e)))?;
        }

        if self.suggestion_bucket.is_empty() || self.suggestion_bucket.contains('/') {
            return Err(Error::InvalidConfig(
                "suggestion_bucket must be a single non-empty path segment".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(1..=50).contains(&self.credit_limit) {
            return Err(Error::InvalidConfig(format!(
                "credit_limit must be 1-50, got {}",
                self.credit_limit
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 6] = [
        "FILMCHECK_GRAPHQL_URL",
        "FILMCHECK_SUGGESTION_URL",
        "FILMCHECK_SUGGESTION_BUCKET",
        "FILMCHECK_TIMEOUT_SECS",
        "FILMCHECK_CREDIT_LIMIT",
        "FILMCHECK_OUTPUT_FORMAT",
    ];

    fn clean_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
        guard
    }

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.graphql_url, "https://graph.imdbapi.dev/v1");
        assert_eq!(config.suggestion_url, "https://v3.sg.media-imdb.com/suggestion");
        assert_eq!(config.suggestion_bucket, "x");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.credit_limit, 5);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_load_without_file() {
        let _env = clean_env();
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_missing_file_is_error() {
        let _env = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_config_load_from_file() {
        let _env = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            r#"
graphql_url = "http://localhost:8080/graphql"
timeout_secs = 5
credit_limit = 10
output_format = "json"
"#,
        );

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.graphql_url, "http://localhost:8080/graphql");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.credit_limit, 10);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.suggestion_bucket, "x");
    }

    #[test]
    fn test_config_invalid_toml() {
        let _env = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "timeout_secs = \"soon\"");
        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let _env = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "timeout_secs = 0");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_validation_credit_limit_range() {
        let _env = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "credit_limit = 51");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_validation_bad_url() {
        let _env = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "graphql_url = \"not a url\"");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_validation_bucket_with_slash() {
        let _env = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "suggestion_bucket = \"a/b\"");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_config_env_override_timeout() {
        let _env = clean_env();
        std::env::set_var("FILMCHECK_TIMEOUT_SECS", "7");
        let config = Config::load(None);
        std::env::remove_var("FILMCHECK_TIMEOUT_SECS");
        assert_eq!(config.unwrap().timeout_secs, 7);
    }

    #[test]
    fn test_config_env_invalid_timeout() {
        let _env = clean_env();
        std::env::set_var("FILMCHECK_TIMEOUT_SECS", "invalid");
        let result = Config::load(None);
        std::env::remove_var("FILMCHECK_TIMEOUT_SECS");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_env_invalid_format() {
        let _env = clean_env();
        std::env::set_var("FILMCHECK_OUTPUT_FORMAT", "yaml");
        let result = Config::load(None);
        std::env::remove_var("FILMCHECK_OUTPUT_FORMAT");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _env = clean_env();
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "output_format = \"plain\"");

        std::env::set_var("FILMCHECK_OUTPUT_FORMAT", "json");
        let config = Config::load(Some(&path));
        std::env::remove_var("FILMCHECK_OUTPUT_FORMAT");
        assert_eq!(config.unwrap().output_format, OutputFormat::Json);
    }

    #[test]
    fn test_output_format_parse_round_names() {
        for format in [OutputFormat::Json, OutputFormat::Table, OutputFormat::Plain] {
            assert_eq!(OutputFormat::parse(format.as_str()).unwrap(), format);
        }
    }
}
