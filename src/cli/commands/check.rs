//! Implementation of the `authconf check` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{output, status_mark, CommandOutput};
use crate::domain::models::{Config, Environment};
use crate::services::{CredentialStore, RecordStatus};

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub environment: Environment,
    pub origin: String,
    pub records: Vec<RecordStatus>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let origin = if self.origin.is_empty() {
            "(unset)"
        } else {
            self.origin.as_str()
        };
        let mut lines = vec![
            format!("Environment: {}", self.environment),
            format!("Origin:      {origin}"),
            String::new(),
        ];
        for status in &self.records {
            lines.push(format!(
                "{} {:<14} {}",
                status_mark(status.completeness.is_populated()),
                status.record,
                status.completeness
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Build the store exactly as application bootstrap would, failing fast.
pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let store = CredentialStore::from_config(config)
        .with_context(|| format!("credentials are not usable in {}", config.environment))?;

    let result = CheckOutput {
        success: true,
        environment: store.environment(),
        origin: store.origin().to_string(),
        records: store.statuses(),
    };
    output(&result, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Completeness;

    #[test]
    fn test_check_rejects_template_in_production() {
        let config = Config {
            environment: Environment::Production,
            ..Config::default()
        };
        let err = execute(&config, true).unwrap_err();
        assert!(format!("{err:#}").contains("production"));
    }

    #[test]
    fn test_check_output_json_shape() {
        let result = CheckOutput {
            success: true,
            environment: Environment::Development,
            origin: String::new(),
            records: vec![RecordStatus {
                record: "firebase",
                completeness: Completeness::Template,
            }],
        };
        let json = result.to_json();
        assert_eq!(json["environment"], "development");
        assert_eq!(json["records"][0]["record"], "firebase");
        assert_eq!(json["records"][0]["state"], "template");
    }
}
