//! Helpers shared by the credential records.

use serde::{Deserialize, Deserializer};

/// Number of leading characters left visible by [`redact`].
const VISIBLE_PREFIX: usize = 4;

/// Mask a secret value for display, keeping a short prefix so operators can
/// tell keys apart.
///
/// Empty values stay empty so template state remains recognizable.
pub fn redact(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value.chars().count() <= VISIBLE_PREFIX * 2 {
        return "****".to_string();
    }
    let prefix: String = value.chars().take(VISIBLE_PREFIX).collect();
    format!("{prefix}****")
}

/// Deserialize an opaque credential that may arrive as a YAML or env number.
///
/// Numeric-looking values such as Firebase messaging sender IDs are parsed as
/// integers by both the YAML and environment providers. A null value (a bare
/// `api_key:` key) is the empty template value.
pub fn opaque_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Str(s)) => s,
        Some(Raw::Unsigned(n)) => n.to_string(),
        Some(Raw::Signed(n)) => n.to_string(),
        Some(Raw::Float(n)) => n.to_string(),
        Some(Raw::Bool(b)) => b.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_keeps_prefix() {
        assert_eq!(redact("AIzaSyA-1234567890abcdef"), "AIza****");
    }

    #[test]
    fn test_redact_short_and_empty() {
        assert_eq!(redact(""), "");
        assert_eq!(redact("abc"), "****");
        assert_eq!(redact("12345678"), "****");
    }

    #[test]
    fn test_opaque_string_accepts_numbers() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "opaque_string")]
            value: String,
        }

        let holder: Holder = serde_yaml::from_str("value: 123456789012").unwrap();
        assert_eq!(holder.value, "123456789012");

        let holder: Holder = serde_yaml::from_str("value: '000123'").unwrap();
        assert_eq!(holder.value, "000123");

        let holder: Holder = serde_yaml::from_str("value:").unwrap();
        assert_eq!(holder.value, "");
    }
}
