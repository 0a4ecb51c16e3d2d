use url::Url;

use crate::domain::errors::{CredentialError, CredentialResult};

/// An origin is empty (template) or `http(s)://host[:port]` with nothing after.
///
/// A trailing slash is rejected because the callback path is appended verbatim.
pub fn validate_origin(origin: &str) -> CredentialResult<()> {
    if origin.is_empty() {
        return Ok(());
    }

    let invalid = |reason: &str| CredentialError::InvalidOrigin {
        origin: origin.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(origin).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid("must not contain credentials"));
    }
    if origin.ends_with('/') || url.path() != "/" {
        return Err(invalid("must not contain a path or trailing slash"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not contain a query or fragment"));
    }

    Ok(())
}
