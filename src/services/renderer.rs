//! Browser-side rendering of the credential records.
//!
//! Produces the object literals handed to the OAuth redirect flow and to the
//! Firebase client SDK, with the exact field names those libraries expect.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Value};

use crate::domain::models::OAuthProvider;
use crate::services::credential_store::CredentialStore;

const POPULATED_HEADER: &str = "// This file should be in .gitignore - DO NOT commit to GitHub";
const TEMPLATE_HEADER: &str =
    "// Credential template: commit this file, keep the populated copy out of version control";

/// Output flavour for `render`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Json,
    Js,
}

/// `{"oauth": {"google": {...}}, "firebase": {...}}`
pub fn render_json(store: &CredentialStore) -> Value {
    let oauth: serde_json::Map<String, Value> = OAuthProvider::ALL
        .iter()
        .map(|&provider| {
            (
                provider.as_str().to_string(),
                json!(store.oauth_config(provider).sdk_view()),
            )
        })
        .collect();

    json!({
        "oauth": oauth,
        "firebase": store.firebase_config().sdk_view(),
    })
}

/// `const OAUTH_CONFIG = ...; const FIREBASE_CONFIG = ...;`
///
/// Without a configured origin the redirect URI falls back to the browser's
/// `window.location.origin` at runtime.
pub fn render_js(store: &CredentialStore) -> serde_json::Result<String> {
    let mut out = String::new();
    let header = if store.is_template() {
        TEMPLATE_HEADER
    } else {
        POPULATED_HEADER
    };
    out.push_str(header);
    out.push_str("\n\n");

    out.push_str("// OAuth Configuration\nconst OAUTH_CONFIG = {\n");
    for (index, provider) in OAuthProvider::ALL.iter().enumerate() {
        let oauth = store.oauth_config(*provider);
        let redirect = if store.origin().is_empty() {
            format!(
                "window.location.origin + '{}'",
                provider.callback_path()
            )
        } else {
            serde_json::to_string(&oauth.redirect_uri)?
        };

        out.push_str(&format!("    {}: {{\n", provider.as_str()));
        out.push_str(&format!(
            "        clientId: {},\n",
            serde_json::to_string(&oauth.client_id)?
        ));
        out.push_str(&format!("        redirectUri: {redirect},\n"));
        out.push_str(&format!(
            "        scope: {}\n",
            serde_json::to_string(&oauth.scope)?
        ));
        out.push_str("    }");
        if index + 1 < OAuthProvider::ALL.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n\n");

    out.push_str("// Firebase Configuration\nconst FIREBASE_CONFIG = ");
    out.push_str(&to_js_object(&store.firebase_config().sdk_view())?);
    out.push_str(";\n");

    Ok(out)
}

pub fn render(store: &CredentialStore, format: RenderFormat) -> serde_json::Result<String> {
    match format {
        RenderFormat::Json => serde_json::to_string_pretty(&render_json(store)),
        RenderFormat::Js => render_js(store),
    }
}

/// Pretty JSON with four-space indentation; valid as a JS object literal.
fn to_js_object<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Environment;
    use crate::services::credential_store::fixtures::{populated_config, CLIENT_ID};

    fn populated_store() -> CredentialStore {
        CredentialStore::from_config(&populated_config(Environment::Production)).unwrap()
    }

    #[test]
    fn test_render_json_field_names() {
        let value = render_json(&populated_store());

        assert_eq!(value["oauth"]["google"]["clientId"], CLIENT_ID);
        assert_eq!(
            value["oauth"]["google"]["redirectUri"],
            "https://app.example.com/auth/google/callback"
        );
        assert_eq!(value["oauth"]["google"]["scope"], "openid email profile");
        assert_eq!(value["firebase"]["projectId"], "demo-app");
        assert_eq!(value["firebase"]["messagingSenderId"], "123456789012");
    }

    #[test]
    fn test_render_json_template_is_empty() {
        let value = render_json(&CredentialStore::template(""));
        assert_eq!(value["oauth"]["google"]["clientId"], "");
        for (_, field) in value["firebase"].as_object().unwrap() {
            assert_eq!(field, "");
        }
    }

    #[test]
    fn test_render_json_whitespace_record_renders_empty() {
        let mut config = populated_config(Environment::Development);
        config.firebase.api_key = " ".to_string();
        config.firebase.auth_domain = " ".to_string();
        config.firebase.project_id = " ".to_string();
        config.firebase.storage_bucket = " ".to_string();
        config.firebase.messaging_sender_id = " ".to_string();
        config.firebase.app_id = " ".to_string();
        config.firebase.measurement_id = " ".to_string();

        let value = render_json(&CredentialStore::from_config(&config).unwrap());
        assert_eq!(value["firebase"]["apiKey"], "");
        assert_eq!(value["firebase"]["projectId"], "");
    }

    #[test]
    fn test_render_js_template_uses_runtime_origin() {
        let js = render_js(&CredentialStore::template("")).unwrap();

        assert!(js.starts_with(TEMPLATE_HEADER));
        assert!(js.contains("const OAUTH_CONFIG = {"));
        assert!(js.contains("clientId: \"\","));
        assert!(js.contains("redirectUri: window.location.origin + '/auth/google/callback',"));
        assert!(js.contains("scope: \"openid email profile\""));
        assert!(js.contains("const FIREBASE_CONFIG = {"));
        assert!(js.contains("\"apiKey\": \"\""));
        assert!(js.trim_end().ends_with("};"));
    }

    #[test]
    fn test_render_js_populated_uses_literal_redirect() {
        let js = render_js(&populated_store()).unwrap();

        assert!(js.starts_with(POPULATED_HEADER));
        assert!(js.contains(&format!("clientId: \"{CLIENT_ID}\",")));
        assert!(js.contains(
            "redirectUri: \"https://app.example.com/auth/google/callback\","
        ));
        assert!(!js.contains("window.location.origin"));
        assert!(js.contains("\"authDomain\": \"demo-app.firebaseapp.com\""));
    }

    #[test]
    fn test_render_dispatch() {
        let store = CredentialStore::template("");
        let json = render(&store, RenderFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["oauth"]["google"].is_object());

        let js = render(&store, RenderFormat::Js).unwrap();
        assert!(js.contains("FIREBASE_CONFIG"));
    }
}
