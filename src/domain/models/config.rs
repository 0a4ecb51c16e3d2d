use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::environment::Environment;
use super::firebase::FirebaseConfig;
use super::oauth::OAuthProvider;
use super::secret::opaque_string;

/// Main configuration structure, as merged by the loader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Deployment tier: development, staging, production
    #[serde(default)]
    pub environment: Environment,

    /// Application origin (scheme://host[:port]) the redirect URI is built on
    #[serde(default)]
    pub origin: String,

    /// OAuth client settings per provider
    #[serde(default)]
    pub oauth: OAuthSettings,

    /// Firebase project credentials
    #[serde(default)]
    pub firebase: FirebaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// OAuth settings keyed by provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OAuthSettings {
    #[serde(default = "google_settings")]
    pub google: ProviderSettings,
}

impl OAuthSettings {
    pub const fn provider(&self, provider: OAuthProvider) -> &ProviderSettings {
        match provider {
            OAuthProvider::Google => &self.google,
        }
    }
}

fn google_settings() -> ProviderSettings {
    ProviderSettings::for_provider(OAuthProvider::Google)
}

impl Default for OAuthSettings {
    fn default() -> Self {
        Self {
            google: google_settings(),
        }
    }
}

/// Loaded settings for a single OAuth provider.
///
/// The redirect URI is not configurable; it is derived from `origin`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProviderSettings {
    #[serde(default, deserialize_with = "opaque_string")]
    pub client_id: String,

    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_scope() -> String {
    OAuthProvider::Google.default_scope().to_string()
}

impl ProviderSettings {
    pub fn for_provider(provider: OAuthProvider) -> Self {
        Self {
            client_id: String::new(),
            scope: provider.default_scope().to_string(),
        }
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("client_id", &super::secret::redact(&self.client_id))
            .field("scope", &self.scope)
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; console only when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            directory: None,
            rotation: default_rotation(),
        }
    }
}
