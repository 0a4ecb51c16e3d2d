//! Infrastructure layer module
//!
//! - Configuration loading (figment, dotenv)
//! - Logging infrastructure (tracing)

pub mod config;
pub mod logging;
