//! Implementation of the `authconf render` command.

use anyhow::{Context, Result};

use crate::cli::types::RenderArgs;
use crate::domain::models::Config;
use crate::services::{render, CredentialStore};

/// Print the snippet to stdout. The template needs no loaded configuration.
pub fn execute(args: &RenderArgs, loaded: Result<Config>) -> Result<()> {
    let store = if args.template {
        CredentialStore::template("")
    } else {
        let config = loaded?;
        CredentialStore::from_config(&config).context("cannot render unusable credentials")?
    };

    let rendered = render(&store, args.format.into()).context("failed to render configuration")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::RenderFormatArg;

    #[test]
    fn test_template_ignores_load_failure() {
        let args = RenderArgs {
            format: RenderFormatArg::Js,
            template: true,
        };
        assert!(execute(&args, Err(anyhow::anyhow!("no config"))).is_ok());
    }

    #[test]
    fn test_load_failure_propagates() {
        let args = RenderArgs {
            format: RenderFormatArg::Json,
            template: false,
        };
        assert!(execute(&args, Err(anyhow::anyhow!("no config"))).is_err());
    }
}
