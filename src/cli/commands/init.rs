//! Implementation of the `authconf init` command.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::InitArgs;
use crate::infrastructure::config::{DOTENV_FILE, LOCAL_FILE, TEMPLATE_FILE};

/// Committed template: every credential empty, safe for version control.
pub const TEMPLATE_YAML: &str = r#"# Credential configuration template. Safe to commit: every credential is empty.
#
# Put real values in config/credentials.local.yaml (git-ignored), in .env, or in
# AUTHCONF_* environment variables, e.g. AUTHCONF_FIREBASE__API_KEY.
environment: development

# Application origin, e.g. https://app.example.com (no trailing slash).
# The OAuth redirect URI is always <origin>/auth/google/callback.
origin: ""

oauth:
  google:
    client_id: ""
    scope: openid email profile

firebase:
  api_key: ""
  auth_domain: ""
  project_id: ""
  storage_bucket: ""
  messaging_sender_id: ""
  app_id: ""
  measurement_id: ""

logging:
  level: info
  format: pretty
"#;

const GITIGNORE_HEADER: &str = "# Populated credentials";

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub initialized_path: PathBuf,
    pub template_written: bool,
    pub gitignore_entries_added: Vec<String>,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.template_written {
            lines.push(format!("\nWrote template {TEMPLATE_FILE}"));
        }
        if !self.gitignore_entries_added.is_empty() {
            lines.push("\nAdded to .gitignore:".to_string());
            for entry in &self.gitignore_entries_added {
                lines.push(format!("  - {entry}"));
            }
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let result = initialize(&args.path, args.force).await?;
    output(&result, json_mode);
    Ok(())
}

/// Write the template and make sure the secret files are git-ignored.
pub async fn initialize(path: &Path, force: bool) -> Result<InitOutput> {
    let target_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(path)
    };

    let template_path = target_path.join(TEMPLATE_FILE);
    let template_exists = fs::try_exists(&template_path)
        .await
        .with_context(|| format!("Failed to inspect {}", template_path.display()))?;

    // Always repair .gitignore, even when the template is left alone
    let gitignore_entries_added = ensure_gitignore(&target_path).await?;

    if template_exists && !force {
        return Ok(InitOutput {
            success: false,
            message: "Template already exists. Use --force to overwrite.".to_string(),
            initialized_path: target_path,
            template_written: false,
            gitignore_entries_added,
        });
    }

    if let Some(parent) = template_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&template_path, TEMPLATE_YAML)
        .await
        .with_context(|| format!("Failed to write {}", template_path.display()))?;

    tracing::info!(path = %template_path.display(), "wrote credential template");

    Ok(InitOutput {
        success: true,
        message: if template_exists {
            "Credential template reinitialized.".to_string()
        } else {
            "Credential template initialized.".to_string()
        },
        initialized_path: target_path,
        template_written: true,
        gitignore_entries_added,
    })
}

/// Append the local secret files to `.gitignore`, skipping lines already present.
async fn ensure_gitignore(root: &Path) -> Result<Vec<String>> {
    let gitignore_path = root.join(".gitignore");
    let existing = match fs::read_to_string(&gitignore_path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read {}", gitignore_path.display()))
        }
    };

    let missing: Vec<String> = [LOCAL_FILE, DOTENV_FILE]
        .iter()
        .filter(|entry| {
            !existing.lines().any(|line| {
                let line = line.trim().trim_start_matches('/');
                line == **entry
            })
        })
        .map(|entry| (*entry).to_string())
        .collect();

    if missing.is_empty() {
        return Ok(missing);
    }

    let mut updated = existing;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    if !updated.is_empty() {
        updated.push('\n');
    }
    updated.push_str(GITIGNORE_HEADER);
    updated.push('\n');
    for entry in &missing {
        updated.push_str(entry);
        updated.push('\n');
    }

    fs::write(&gitignore_path, updated)
        .await
        .with_context(|| format!("Failed to write {}", gitignore_path.display()))?;

    Ok(missing)
}
