use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const KEY_ID_PATTERN: &str = r"^[A-Za-z0-9._:-]{1,128}$";

fn key_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(KEY_ID_PATTERN).expect("invalid regex"))
}

/// Identifier of a signing key, carried in the `kid` header
/// (pattern: `[A-Za-z0-9._:-]{1,128}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(String);

impl KeyId {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated identifier from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let id = Self(value.into());
        id.validate()?;
        Ok(id)
    }

    /// Checks the identifier against the key-ID pattern.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !key_id_regex().is_match(&self.0) {
            return Err(ValidationError::PatternMismatch {
                field: "KeyId",
                value: self.0.clone(),
            });
        }
        Ok(())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for KeyId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for KeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
