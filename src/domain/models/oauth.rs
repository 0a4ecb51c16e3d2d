//! OAuth client configuration.
//!
//! The redirect URI is never loaded from configuration: it is always derived
//! from the application origin and the provider's fixed callback path, so the
//! two cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

use super::completeness::Completeness;
use super::secret::redact;
use crate::domain::errors::{CredentialError, CredentialResult};

/// Supported OAuth identity providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    pub const ALL: [Self; 1] = [Self::Google];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }

    /// Path appended to the application origin to form the redirect URI.
    pub const fn callback_path(self) -> &'static str {
        match self {
            Self::Google => "/auth/google/callback",
        }
    }

    pub const fn default_scope(self) -> &'static str {
        match self {
            Self::Google => "openid email profile",
        }
    }

    pub const fn authorization_endpoint(self) -> &'static str {
        match self {
            Self::Google => "https://accounts.google.com/o/oauth2/v2/auth",
        }
    }

    /// Key used for this provider's record in errors and rendered output.
    pub const fn record_name(self) -> &'static str {
        match self {
            Self::Google => "oauth.google",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            other => Err(CredentialError::UnknownProvider(other.to_string())),
        }
    }
}

/// Redirect URI for `provider` under `origin`.
///
/// Plain concatenation: the origin is used verbatim.
pub fn redirect_uri(origin: &str, provider: OAuthProvider) -> String {
    format!("{origin}{}", provider.callback_path())
}

/// OAuth client record handed to the redirect flow.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthConfig {
    pub provider: OAuthProvider,
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
}

impl OAuthConfig {
    pub fn new(
        provider: OAuthProvider,
        client_id: impl Into<String>,
        origin: &str,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            client_id: client_id.into(),
            redirect_uri: redirect_uri(origin, provider),
            scope: scope.into(),
        }
    }

    /// Placeholder record: empty client ID, provider default scope.
    pub fn template(provider: OAuthProvider, origin: &str) -> Self {
        Self::new(provider, "", origin, provider.default_scope())
    }

    /// Individual permission identifiers from the space-separated scope.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.split_whitespace()
    }

    /// The scope is not a secret and does not take part in the check.
    pub fn completeness(&self) -> Completeness {
        Completeness::from_fields(&[("client_id", self.client_id.as_str())])
    }

    /// Provider authorization redirect for the code flow.
    pub fn authorization_url(&self, state: &str) -> CredentialResult<String> {
        if !self.completeness().is_populated() {
            return Err(CredentialError::Unpopulated {
                record: self.provider.record_name(),
            });
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", &self.scope)
            .append_pair("state", state)
            .finish();

        Ok(format!("{}?{query}", self.provider.authorization_endpoint()))
    }

    /// Borrowed view with the field names the browser flow expects.
    pub fn sdk_view(&self) -> OAuthSdkConfig<'_> {
        OAuthSdkConfig {
            client_id: &self.client_id,
            redirect_uri: &self.redirect_uri,
            scope: &self.scope,
        }
    }
}

impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("provider", &self.provider)
            .field("client_id", &redact(&self.client_id))
            .field("redirect_uri", &self.redirect_uri)
            .field("scope", &self.scope)
            .finish()
    }
}

/// `clientId` / `redirectUri` / `scope` shape consumed by the web client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthSdkConfig<'a> {
    pub client_id: &'a str,
    pub redirect_uri: &'a str,
    pub scope: &'a str,
}
