//! Implementation of the `authconf show` command.

use anyhow::Result;
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{redact, Config, FirebaseConfig, OAuthProvider};
use crate::services::CredentialStore;

/// One displayed field; `value` is already masked when secret
#[derive(Debug, Clone, Serialize)]
pub struct FieldRow {
    pub record: &'static str,
    pub field: &'static str,
    pub value: String,
    pub set: bool,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub environment: String,
    pub origin: String,
    pub fields: Vec<FieldRow>,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Record").add_attribute(Attribute::Bold),
                Cell::new("Field").add_attribute(Attribute::Bold),
                Cell::new("Value").add_attribute(Attribute::Bold),
            ]);

        for row in &self.fields {
            let value = if row.set { row.value.as_str() } else { "(empty)" };
            table.add_row(vec![row.record, row.field, value]);
        }

        format!(
            "Environment: {}\nOrigin: {}\n{table}",
            self.environment,
            if self.origin.is_empty() { "(unset)" } else { self.origin.as_str() }
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Collect display rows without enforcing completeness, so broken
/// configurations can be inspected.
pub fn collect_rows(store: &CredentialStore) -> Vec<FieldRow> {
    let mut rows = Vec::new();

    for provider in OAuthProvider::ALL {
        let oauth = store.oauth_config(provider);
        let record = provider.record_name();
        rows.push(FieldRow {
            record,
            field: "client_id",
            value: redact(&oauth.client_id),
            set: !oauth.client_id.is_empty(),
        });
        rows.push(FieldRow {
            record,
            field: "redirect_uri",
            value: oauth.redirect_uri.clone(),
            set: !store.origin().is_empty(),
        });
        rows.push(FieldRow {
            record,
            field: "scope",
            value: oauth.scope.clone(),
            set: !oauth.scope.is_empty(),
        });
    }

    for (field, value) in store.firebase_config().fields() {
        let shown = if FirebaseConfig::is_secret_field(field) {
            redact(value)
        } else {
            value.to_string()
        };
        rows.push(FieldRow {
            record: FirebaseConfig::RECORD_NAME,
            field,
            value: shown,
            set: !value.trim().is_empty(),
        });
    }

    rows
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let store = CredentialStore::from_config_unchecked(config);
    let result = ShowOutput {
        environment: store.environment().to_string(),
        origin: store.origin().to_string(),
        fields: collect_rows(&store),
    };
    output(&result, json_mode);
    Ok(())
}
