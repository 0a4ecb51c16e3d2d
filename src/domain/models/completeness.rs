use serde::Serialize;
use std::fmt;

use crate::domain::errors::{CredentialError, CredentialResult};

/// Population state of a credential record.
///
/// A record is usable only when every credential field is set (`Populated`)
/// or none is (`Template`). Whitespace-only values count as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Completeness {
    Template,
    Populated,
    Partial { missing: Vec<&'static str> },
}

impl Completeness {
    /// Classify a record from its `(field name, value)` pairs.
    pub fn from_fields(fields: &[(&'static str, &str)]) -> Self {
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Self::Populated
        } else if missing.len() == fields.len() {
            Self::Template
        } else {
            Self::Partial { missing }
        }
    }

    pub const fn is_template(&self) -> bool {
        matches!(self, Self::Template)
    }

    pub const fn is_populated(&self) -> bool {
        matches!(self, Self::Populated)
    }

    /// Reject the partial state, which is never valid for use.
    pub fn ensure_not_partial(&self, record: &'static str) -> CredentialResult<()> {
        match self {
            Self::Partial { missing } => Err(CredentialError::PartiallyPopulated {
                record,
                missing: missing.clone(),
            }),
            Self::Template | Self::Populated => Ok(()),
        }
    }
}

impl fmt::Display for Completeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template => write!(f, "template"),
            Self::Populated => write!(f, "populated"),
            Self::Partial { missing } => write!(f, "partial (missing: {})", missing.join(", ")),
        }
    }
}
