//! Domain errors for credential configuration.

use thiserror::Error;

use super::models::Environment;

/// Errors raised while building or using the credential records.
///
/// Every variant is a startup-time failure: the only recovery is to supply
/// correct secrets and restart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{record} credentials are partially populated; missing: {}", .missing.join(", "))]
    PartiallyPopulated {
        record: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("{record} credentials are empty but the {environment} environment requires them")]
    MissingCredentials {
        record: &'static str,
        environment: Environment,
    },

    #[error("{record} credentials are not populated")]
    Unpopulated { record: &'static str },

    #[error("application origin must be set when credentials are populated")]
    MissingOrigin,

    #[error("Invalid origin {origin:?}: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("Unknown OAuth provider: {0}")]
    UnknownProvider(String),

    #[error("Unknown environment: {0}. Must be one of: development, staging, production")]
    UnknownEnvironment(String),
}

pub type CredentialResult<T> = Result<T, CredentialError>;
