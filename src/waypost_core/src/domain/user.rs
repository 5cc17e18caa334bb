use secrecy::Secret;
use uuid::Uuid;

use crate::domain::{email::Email, username::Username};
use crate::ports::repositories::Entity;

/// A registered user.
///
/// `refresh_tokens` is the set of currently-valid refresh tokens for this
/// user. A refresh token that is not in this list is permanently unusable,
/// even if its signature would still verify.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    email: Email,
    username: Username,
    password_hash: Secret<String>,
    refresh_tokens: Vec<String>,
}

impl User {
    /// Create a new user with a fresh id and no active sessions.
    pub fn new(email: Email, username: Username, password_hash: Secret<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            refresh_tokens: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn refresh_tokens(&self) -> &[String] {
        &self.refresh_tokens
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn set_username(&mut self, username: Username) {
        self.username = username;
    }

    pub fn has_refresh_token(&self, token: &str) -> bool {
        self.refresh_tokens.iter().any(|t| t == token)
    }

    /// Record a newly issued refresh token. Logins are additive: each call
    /// opens another concurrent session.
    pub fn push_refresh_token(&mut self, token: String) {
        self.refresh_tokens.push(token);
    }

    pub fn remove_refresh_token(&mut self, token: &str) {
        self.refresh_tokens.retain(|t| t != token);
    }

    /// Revoke every active session at once (the anomaly-wipe path).
    pub fn clear_refresh_tokens(&mut self) {
        self.refresh_tokens.clear();
    }
}

impl Entity for User {
    fn id(&self) -> Uuid {
        self.id
    }
}
