//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Committed YAML template and git-ignored local secrets
//! - `.env` and environment variable overrides
//! - Validation of non-credential settings and the application origin

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, DOTENV_FILE, ENV_PREFIX, LOCAL_FILE, TEMPLATE_FILE};
