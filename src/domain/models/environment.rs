use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::CredentialError;

/// Deployment tier the credentials are loaded for.
///
/// Only `Development` may run with template (empty) credentials.
///
/// Deserialized through `FromStr`, so the `dev` and `prod` aliases and any
/// letter case are accepted from files and the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    pub const fn allows_template(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(CredentialError::UnknownEnvironment(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = CredentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(" Dev ".parse::<Environment>(), Ok(Environment::Development));
        assert!(matches!(
            "qa".parse::<Environment>(),
            Err(CredentialError::UnknownEnvironment(name)) if name == "qa"
        ));
    }

    #[test]
    fn test_deserialize_accepts_aliases() {
        let env: Environment = serde_json::from_str("\"PROD\"").unwrap();
        assert_eq!(env, Environment::Production);

        let env: Environment = serde_json::from_str("\"dev\"").unwrap();
        assert_eq!(env, Environment::Development);

        assert!(serde_json::from_str::<Environment>("\"qa\"").is_err());
        assert_eq!(serde_json::to_string(&Environment::Staging).unwrap(), "\"staging\"");
    }

    #[test]
    fn test_only_development_allows_template() {
        assert!(Environment::Development.allows_template());
        assert!(!Environment::Staging.allows_template());
        assert!(!Environment::Production.allows_template());
    }
}
