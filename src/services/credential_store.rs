//! Read-only store of the validated credential records.
//!
//! Built once by the bootstrap step and passed by reference to whatever
//! performs authentication. Construction is the only place credentials are
//! checked; the accessors cannot fail.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::domain::errors::{CredentialError, CredentialResult};
use crate::domain::models::{
    validate_origin, Completeness, Config, Environment, FirebaseConfig, OAuthConfig,
    OAuthProvider,
};

/// Completeness of one named record, as reported by `check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordStatus {
    pub record: &'static str,
    #[serde(flatten)]
    pub completeness: Completeness,
}

#[derive(Debug, Clone)]
pub struct CredentialStore {
    environment: Environment,
    origin: String,
    google: OAuthConfig,
    firebase: FirebaseConfig,
}

impl CredentialStore {
    /// Build the records from loaded configuration and fail fast on any
    /// state that is not valid for `config.environment`.
    #[instrument(skip(config), fields(environment = %config.environment))]
    pub fn from_config(config: &Config) -> CredentialResult<Self> {
        validate_origin(&config.origin)?;

        let store = Self::from_config_unchecked(config);
        store.enforce()?;
        info!(
            origin = %store.origin,
            template = store.is_template(),
            "credential store ready"
        );
        Ok(store)
    }

    /// Build the records without enforcing any invariant.
    ///
    /// For diagnostics only: the result may be partial or lack an origin.
    /// Credential values are trimmed, as in [`Self::from_config`].
    pub fn from_config_unchecked(config: &Config) -> Self {
        let google_settings = config.oauth.provider(OAuthProvider::Google);
        Self {
            environment: config.environment,
            origin: config.origin.clone(),
            google: OAuthConfig::new(
                OAuthProvider::Google,
                google_settings.client_id.trim(),
                &config.origin,
                google_settings.scope.as_str(),
            ),
            firebase: config.firebase.trimmed(),
        }
    }

    /// Placeholder store for `development`: every credential field empty.
    pub fn template(origin: &str) -> Self {
        Self {
            environment: Environment::Development,
            origin: origin.to_string(),
            google: OAuthConfig::template(OAuthProvider::Google, origin),
            firebase: FirebaseConfig::template(),
        }
    }

    fn enforce(&self) -> CredentialResult<()> {
        let statuses = self.statuses();

        for status in &statuses {
            status.completeness.ensure_not_partial(status.record)?;
        }

        for status in statuses.iter().filter(|s| s.completeness.is_template()) {
            if !self.environment.allows_template() {
                return Err(CredentialError::MissingCredentials {
                    record: status.record,
                    environment: self.environment,
                });
            }
            warn!(
                record = status.record,
                "credentials are in template state; authentication is unavailable"
            );
        }

        let any_populated = statuses.iter().any(|s| s.completeness.is_populated());
        if any_populated && self.origin.is_empty() {
            return Err(CredentialError::MissingOrigin);
        }

        if self.google.completeness().is_populated()
            && !self.google.client_id.ends_with(".apps.googleusercontent.com")
        {
            warn!("oauth.google client_id does not look like a Google client ID");
        }

        Ok(())
    }

    /// OAuth record for `provider`; the template record when secrets are absent.
    pub const fn oauth_config(&self, provider: OAuthProvider) -> &OAuthConfig {
        match provider {
            OAuthProvider::Google => &self.google,
        }
    }

    /// Firebase record; the template record when secrets are absent.
    pub const fn firebase_config(&self) -> &FirebaseConfig {
        &self.firebase
    }

    pub const fn environment(&self) -> Environment {
        self.environment
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Completeness of every record, OAuth providers first.
    pub fn statuses(&self) -> Vec<RecordStatus> {
        OAuthProvider::ALL
            .iter()
            .map(|&provider| RecordStatus {
                record: provider.record_name(),
                completeness: self.oauth_config(provider).completeness(),
            })
            .chain(std::iter::once(RecordStatus {
                record: FirebaseConfig::RECORD_NAME,
                completeness: self.firebase.completeness(),
            }))
            .collect()
    }

    /// True when no record carries credentials.
    pub fn is_template(&self) -> bool {
        self.statuses().iter().all(|s| s.completeness.is_template())
    }

    /// Authorization redirect for `provider` with the given anti-forgery state.
    pub fn authorization_url(&self, provider: OAuthProvider, state: &str) -> CredentialResult<String> {
        self.oauth_config(provider).authorization_url(state)
    }
}
