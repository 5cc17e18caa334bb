//! In-process port implementations shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;
use waypost_core::{
    Email, Entity, Password, PasswordHashError, PasswordHasher, Repository, StoreError,
    TokenError, TokenService, User, UserStore, Username,
};

#[derive(Default, Clone)]
pub struct FakeUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl FakeUserStore {
    /// Insert a user directly, bypassing uniqueness checks.
    pub async fn seed(&self, user: User) {
        self.users.write().await.insert(Entity::id(&user), user);
    }

    pub async fn snapshot(&self, id: &Uuid) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }
}

#[async_trait]
impl Repository<User> for FakeUserStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.email() == user.email() || u.username() == user.username())
        {
            return Err(StoreError::Conflict);
        }
        users.insert(Entity::id(&user), user.clone());
        Ok(user)
    }

    async fn get_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&Entity::id(&user)) {
            return Err(StoreError::NotFound);
        }
        users.insert(Entity::id(&user), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.write().await.remove(id))
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email() == email)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }
}

#[derive(Default, Clone)]
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, plaintext: &Password) -> Result<Secret<String>, PasswordHashError> {
        Ok(Secret::from(format!(
            "hashed:{}",
            plaintext.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        plaintext: &Password,
        hash: &Secret<String>,
    ) -> Result<bool, PasswordHashError> {
        Ok(hash.expose_secret() == &format!("hashed:{}", plaintext.as_ref().expose_secret()))
    }
}

/// Deterministic token service. Tokens look like `access.<subject>.<n>` /
/// `refresh.<subject>.<n>` where `n` makes every issued token unique.
#[derive(Default, Clone)]
pub struct FakeTokenService {
    counter: Arc<AtomicUsize>,
}

impl FakeTokenService {
    fn issue(&self, kind: &str, subject: Uuid) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{kind}.{subject}.{n}")
    }

    fn verify(kind: &str, token: &str) -> Result<Uuid, TokenError> {
        let mut parts = token.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(k), Some(subject), Some(_), None) if k == kind => {
                Uuid::parse_str(subject).map_err(|_| TokenError::Malformed)
            }
            _ => Err(TokenError::Malformed),
        }
    }
}

impl TokenService for FakeTokenService {
    fn issue_access_token(&self, subject: Uuid) -> Result<String, TokenError> {
        Ok(self.issue("access", subject))
    }

    fn issue_refresh_token(&self, subject: Uuid) -> Result<String, TokenError> {
        Ok(self.issue("refresh", subject))
    }

    fn verify_access_token(&self, token: &str) -> Result<Uuid, TokenError> {
        Self::verify("access", token)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<Uuid, TokenError> {
        Self::verify("refresh", token)
    }
}

pub fn test_user(email: &str, username: &str, password: &str) -> User {
    User::new(
        Email::parse(email).unwrap(),
        Username::parse(username).unwrap(),
        Secret::from(format!("hashed:{password}")),
    )
}

pub fn test_password(password: &str) -> Password {
    Password::parse(Secret::from(password.to_string())).unwrap()
}
