//! Credential configuration records and their settings.

pub mod completeness;
pub mod config;
pub mod environment;
pub mod firebase;
pub mod oauth;
pub mod origin;
pub mod secret;

pub use completeness::Completeness;
pub use config::{Config, LoggingConfig, OAuthSettings, ProviderSettings};
pub use environment::Environment;
pub use firebase::{FirebaseConfig, FirebaseSdkConfig};
pub use oauth::{redirect_uri, OAuthConfig, OAuthProvider, OAuthSdkConfig};
pub use origin::validate_origin;
pub use secret::redact;
