use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::models::OAuthProvider;
use crate::services::RenderFormat;

#[derive(Parser, Debug)]
#[command(name = "authconf")]
#[command(about = "Load, check and render OAuth and Firebase web credentials", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load this YAML file instead of the project configuration layers
    #[arg(short, long, global = true, env = "AUTHCONF_CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the committed credential template and git-ignore the secrets
    Init(InitArgs),

    /// Load and validate credentials; exits non-zero when unusable
    Check,

    /// Show the loaded records with secret values masked
    Show,

    /// Render the browser configuration snippet
    Render(RenderArgs),

    /// Print the provider authorization URL for the configured client
    AuthorizeUrl(AuthorizeArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing template
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = RenderFormatArg::Js)]
    pub format: RenderFormatArg,

    /// Render the empty template instead of the loaded credentials
    #[arg(long)]
    pub template: bool,
}

#[derive(Args, Debug)]
pub struct AuthorizeArgs {
    /// OAuth provider
    #[arg(short, long, default_value = "google")]
    pub provider: OAuthProvider,

    /// Anti-forgery state; a random one is generated when omitted
    #[arg(short, long)]
    pub state: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderFormatArg {
    Json,
    Js,
}

impl From<RenderFormatArg> for RenderFormat {
    fn from(arg: RenderFormatArg) -> Self {
        match arg {
            RenderFormatArg::Json => Self::Json,
            RenderFormatArg::Js => Self::Js,
        }
    }
}
