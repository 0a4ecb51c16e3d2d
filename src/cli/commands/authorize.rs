//! Implementation of the `authconf authorize-url` command.

use anyhow::{Context, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::AuthorizeArgs;
use crate::domain::models::{Config, OAuthProvider};
use crate::services::CredentialStore;

#[derive(Debug, Serialize)]
pub struct AuthorizeOutput {
    pub provider: OAuthProvider,
    pub state: String,
    pub url: String,
}

impl CommandOutput for AuthorizeOutput {
    fn to_human(&self) -> String {
        self.url.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &AuthorizeArgs, config: &Config, json_mode: bool) -> Result<()> {
    let store = CredentialStore::from_config(config).context("credentials are not usable")?;
    let state = args
        .state
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    let url = store
        .authorization_url(args.provider, &state)
        .with_context(|| format!("cannot build {} authorization URL", args.provider))?;

    tracing::debug!(provider = %args.provider, "built authorization url");
    output(
        &AuthorizeOutput {
            provider: args.provider,
            state,
            url,
        },
        json_mode,
    );
    Ok(())
}
