use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use waypost_core::{Password, PasswordHashError, PasswordHasher};

/// Argon2id password hasher with a fresh random salt per call.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn hasher<'a>() -> Result<Argon2<'a>, PasswordHashError> {
    let params = Params::new(15000, 2, 1, None)
        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, PasswordHashError> {
        let password = plaintext.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| Secret::from(h.to_string()))
                    .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        plaintext: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, PasswordHashError> {
        let password = plaintext.clone();
        let expected = hash.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = PasswordHash::new(expected.expose_secret())
                    .map_err(|e| PasswordHashError::InvalidHash(e.to_string()))?;

                match hasher()?
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected)
                {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHashError::UnexpectedError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?
    }
}
