use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("password must not be empty")]
    Empty,
}

/// A plaintext password in transit between the request and the hasher.
///
/// Wrapped in [`Secret`] so it never appears in logs or debug output.
#[derive(Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(value: Secret<String>) -> Result<Self, PasswordError> {
        if value.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }

        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
