use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum UsernameError {
    #[error("username must not be empty")]
    Empty,
}

/// A non-empty, trimmed username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, UsernameError> {
        let trimmed = value.as_ref().trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Empty);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
