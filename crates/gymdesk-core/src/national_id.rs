use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A client's national identity number (e.g. a CPF), used as the client key.
///
/// Stored normalized: the usual `.`, `-`, `/` separators and whitespace are
/// dropped, so `123.456.789-09` and `12345678909` name the same client. Only
/// ASCII alphanumerics survive, which keeps the value safe to embed in object
/// keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "String", into = "String")]
#[ts(export)]
pub struct NationalId(String);

impl NationalId {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | '/') && !c.is_whitespace())
            .collect();

        if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidNationalId(raw.to_string()));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NationalId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NationalId> for String {
    fn from(id: NationalId) -> Self {
        id.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_cpf_punctuation() {
        let id = NationalId::parse("123.456.789-09").unwrap();
        assert_eq!(id.as_str(), "12345678909");
        assert_eq!(id, NationalId::parse("12345678909").unwrap());
    }

    #[test]
    fn rejects_empty_and_path_like_values() {
        assert!(NationalId::parse("").is_err());
        assert!(NationalId::parse(" .-/ ").is_err());
        assert!(NationalId::parse("..%2Fclients").is_err());
        assert!(NationalId::parse("..\\clients").is_err());
        assert!(NationalId::parse("abc_123").is_err());
    }

    #[test]
    fn deserializes_through_validation() {
        let id: NationalId = serde_json::from_str("\"987.654.321-00\"").unwrap();
        assert_eq!(id.to_string(), "98765432100");
        assert!(serde_json::from_str::<NationalId>("\"a*b\"").is_err());
    }
}
