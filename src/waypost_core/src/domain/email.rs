use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("email must not be empty")]
    Empty,
    #[error("not a valid email address")]
    Invalid,
}

/// A validated, case-normalized email address.
///
/// Parsing trims surrounding whitespace and lowercases the address so that
/// lookups and uniqueness checks are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, EmailError> {
        let normalized = value.as_ref().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(EmailError::Invalid);
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
