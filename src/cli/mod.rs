//! Command-line interface for the `authconf` binary.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::Result;
use std::path::Path;

pub use output::{error_message, handle_error, output, CommandOutput};
pub use types::{AuthorizeArgs, Cli, Commands, InitArgs, RenderArgs, RenderFormatArg};

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Load configuration from `--config` when given, otherwise from the project layers.
pub fn load_config(config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Run a parsed command. `loaded` is the configuration load result; commands
/// that do not need configuration ignore it.
pub async fn dispatch(command: Commands, loaded: Result<Config>, json_mode: bool) -> Result<()> {
    match command {
        Commands::Init(args) => commands::init::execute(args, json_mode).await,
        Commands::Check => commands::check::execute(&loaded?, json_mode),
        Commands::Show => commands::show::execute(&loaded?, json_mode),
        Commands::Render(args) => commands::render::execute(&args, loaded),
        Commands::AuthorizeUrl(args) => commands::authorize::execute(&args, &loaded?, json_mode),
    }
}
