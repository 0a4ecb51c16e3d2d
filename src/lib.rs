//! Authconf - web authentication credential configuration
//!
//! Loads the OAuth client and Firebase project credentials a web application
//! hands to third-party authentication SDKs, enforces that each record is
//! either fully populated or a committed empty template, and renders the
//! records in the shape the browser libraries expect.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential records and their invariants
//! - **Service Layer** (`services`): the read-only credential store and renderers
//! - **Infrastructure Layer** (`infrastructure`): configuration loading and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use authconf::{ConfigLoader, CredentialStore, OAuthProvider};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let store = CredentialStore::from_config(&config)?;
//!     let google = store.oauth_config(OAuthProvider::Google);
//!     println!("redirecting back to {}", google.redirect_uri);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    redirect_uri, Completeness, Config, Environment, FirebaseConfig, OAuthConfig, OAuthProvider,
};
pub use domain::{CredentialError, CredentialResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::{LogConfig, LoggerImpl};
pub use services::{CredentialStore, RenderFormat};
