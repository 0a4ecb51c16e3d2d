//! Authconf CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use authconf::cli::{self, Cli};
use authconf::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = cli::load_config(cli.config.as_deref());
    let log_config = loaded
        .as_ref()
        .ok()
        .and_then(|config| LogConfig::try_from(&config.logging).ok())
        .unwrap_or_default();
    let _logger = match LoggerImpl::init(&log_config) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    // Loading precedes subscriber installation, so it is reported here
    match &loaded {
        Ok(config) => tracing::debug!(
            environment = %config.environment,
            origin = %config.origin,
            "configuration loaded"
        ),
        Err(err) => tracing::debug!(error = %cli::error_message(err), "configuration not loaded"),
    }

    let json_mode = cli.json;
    match cli::dispatch(cli.command, loaded, json_mode).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::handle_error(&err, json_mode);
            ExitCode::FAILURE
        }
    }
}
