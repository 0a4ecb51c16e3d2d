use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

use crate::domain::errors::CredentialError;
use crate::domain::models::origin::validate_origin;
use crate::domain::models::Config;

/// Committed template with empty credential fields
pub const TEMPLATE_FILE: &str = "config/credentials.yaml";

/// Git-ignored file holding the populated credentials
pub const LOCAL_FILE: &str = "config/credentials.local.yaml";

/// Git-ignored dotenv file read into the process environment
pub const DOTENV_FILE: &str = ".env";

/// Prefix for environment overrides; nesting uses `__`
pub const ENV_PREFIX: &str = "AUTHCONF_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration relative to the current directory.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (template state, development)
    /// 2. config/credentials.yaml (committed template)
    /// 3. config/credentials.local.yaml (git-ignored secrets)
    /// 4. Environment variables (AUTHCONF_* prefix, `.env` included)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(Path::new("."))
    }

    /// Load configuration for the project rooted at `root`
    pub fn load_from_dir(root: impl AsRef<Path>) -> Result<Config> {
        let root = root.as_ref();
        Self::load_dotenv(&root.join(DOTENV_FILE))?;

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(root.join(TEMPLATE_FILE)))
            .merge(Yaml::file(root.join(LOCAL_FILE)));
        let config: Config = Self::merge_env(figment)
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    ///
    /// Environment variables still apply so CI-injected secrets override the
    /// file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path));
        let config: Config = Self::merge_env(figment)
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Merge `AUTHCONF_*` variables over `figment` as raw strings.
    ///
    /// figment's `Env` provider parses values, which would turn an opaque
    /// credential such as `000123456789` into a number and drop its leading
    /// zeros. Keys still follow `Env`'s prefix and `__` nesting rules.
    fn merge_env(figment: Figment) -> Figment {
        Env::prefixed(ENV_PREFIX)
            .split("__")
            .iter()
            .fold(figment, |figment, (key, value)| {
                let key = key.as_str().to_ascii_lowercase();
                figment.merge(Serialized::default(&key, value))
            })
    }

    /// Read a dotenv file into the process environment.
    ///
    /// Variables already set in the environment win. A missing file is fine.
    fn load_dotenv(path: &Path) -> Result<()> {
        match dotenvy::from_path(path) {
            Ok(()) => Ok(()),
            Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to load {}", path.display()))
            }
        }
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        validate_origin(&config.origin)?;

        if config.oauth.google.scope.split_whitespace().next().is_none() {
            return Err(ConfigError::ValidationFailed(
                "oauth.google.scope cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
