use serde::{Deserialize, Serialize};
use std::fmt;

use super::completeness::Completeness;
use super::secret::{opaque_string, redact};

/// Firebase project credentials as issued by the project console.
///
/// `Default` is the template state: every field empty.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FirebaseConfig {
    #[serde(default, deserialize_with = "opaque_string")]
    pub api_key: String,

    #[serde(default, deserialize_with = "opaque_string")]
    pub auth_domain: String,

    #[serde(default, deserialize_with = "opaque_string")]
    pub project_id: String,

    #[serde(default, deserialize_with = "opaque_string")]
    pub storage_bucket: String,

    #[serde(default, deserialize_with = "opaque_string")]
    pub messaging_sender_id: String,

    #[serde(default, deserialize_with = "opaque_string")]
    pub app_id: String,

    #[serde(default, deserialize_with = "opaque_string")]
    pub measurement_id: String,
}

impl FirebaseConfig {
    pub const RECORD_NAME: &'static str = "firebase";

    pub fn template() -> Self {
        Self::default()
    }

    /// `(field name, value)` pairs in console order.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("api_key", self.api_key.as_str()),
            ("auth_domain", self.auth_domain.as_str()),
            ("project_id", self.project_id.as_str()),
            ("storage_bucket", self.storage_bucket.as_str()),
            ("messaging_sender_id", self.messaging_sender_id.as_str()),
            ("app_id", self.app_id.as_str()),
            ("measurement_id", self.measurement_id.as_str()),
        ]
    }

    /// Copy with surrounding whitespace stripped from every field, so a
    /// whitespace-only record is the empty template.
    pub fn trimmed(&self) -> Self {
        Self {
            api_key: self.api_key.trim().to_string(),
            auth_domain: self.auth_domain.trim().to_string(),
            project_id: self.project_id.trim().to_string(),
            storage_bucket: self.storage_bucket.trim().to_string(),
            messaging_sender_id: self.messaging_sender_id.trim().to_string(),
            app_id: self.app_id.trim().to_string(),
            measurement_id: self.measurement_id.trim().to_string(),
        }
    }

    pub fn completeness(&self) -> Completeness {
        Completeness::from_fields(&self.fields())
    }

    /// Whether a field holds a secret that must be masked for display.
    pub fn is_secret_field(name: &str) -> bool {
        matches!(name, "api_key" | "messaging_sender_id" | "app_id")
    }

    /// Borrowed view matching the client SDK initialization object.
    pub fn sdk_view(&self) -> FirebaseSdkConfig<'_> {
        FirebaseSdkConfig {
            api_key: &self.api_key,
            auth_domain: &self.auth_domain,
            project_id: &self.project_id,
            storage_bucket: &self.storage_bucket,
            messaging_sender_id: &self.messaging_sender_id,
            app_id: &self.app_id,
            measurement_id: &self.measurement_id,
        }
    }
}

impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("FirebaseConfig");
        for (name, value) in self.fields() {
            if Self::is_secret_field(name) {
                debug.field(name, &redact(value));
            } else {
                debug.field(name, &value);
            }
        }
        debug.finish()
    }
}

/// Firebase client SDK `initializeApp` configuration shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseSdkConfig<'a> {
    pub api_key: &'a str,
    pub auth_domain: &'a str,
    pub project_id: &'a str,
    pub storage_bucket: &'a str,
    pub messaging_sender_id: &'a str,
    pub app_id: &'a str,
    pub measurement_id: &'a str,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::FirebaseConfig;

    pub fn populated() -> FirebaseConfig {
        FirebaseConfig {
            api_key: "AIzaSyD-test-key-0123456789abcdefghijk".to_string(),
            auth_domain: "demo-app.firebaseapp.com".to_string(),
            project_id: "demo-app".to_string(),
            storage_bucket: "demo-app.appspot.com".to_string(),
            messaging_sender_id: "123456789012".to_string(),
            app_id: "1:123456789012:web:abcdef0123456789".to_string(),
            measurement_id: "G-ABCDEF1234".to_string(),
        }
    }
}
