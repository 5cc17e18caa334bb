use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::password::Password;

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("invalid password hash: {0}")]
    InvalidHash(String),
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

/// One-way salted password hashing.
///
/// Hashing is CPU-expensive by design, so the contract is async and
/// implementations are expected to run off the request dispatch path.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash with a fresh random salt; the same input produces a different
    /// output on every call.
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, PasswordHashError>;

    /// Returns `Ok(false)` on mismatch; errors are reserved for malformed
    /// stored hashes.
    async fn verify(
        &self,
        plaintext: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, PasswordHashError>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("token has expired")]
    Expired,
    #[error("token signature mismatch")]
    SignatureMismatch,
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Malformed, Self::Malformed) => true,
            (Self::Expired, Self::Expired) => true,
            (Self::SignatureMismatch, Self::SignatureMismatch) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Issues and verifies signed tokens for a subject id.
///
/// Verification is pure computation, so the contract is synchronous.
/// Callers that gate authorization treat every [`TokenError`] kind the
/// same way; the kinds exist so tests can tell them apart.
pub trait TokenService: Send + Sync {
    /// Short-lived token, signed with the access secret, expiring after the
    /// configured TTL.
    fn issue_access_token(&self, subject: Uuid) -> Result<String, TokenError>;

    /// Long-lived token, signed with the refresh secret, carrying no
    /// expiration. Revocation happens through the user's refresh-token
    /// list, not through expiry.
    fn issue_refresh_token(&self, subject: Uuid) -> Result<String, TokenError>;

    fn verify_access_token(&self, token: &str) -> Result<Uuid, TokenError>;

    fn verify_refresh_token(&self, token: &str) -> Result<Uuid, TokenError>;
}
