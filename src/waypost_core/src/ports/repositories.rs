use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{comment::Comment, email::Email, post::Post, user::User, username::Username};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Conflict, Self::Conflict) => true,
            (Self::NotFound, Self::NotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Something the repositories can persist, keyed by a stable id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// Generic storage contract shared by every resource.
///
/// Resource-specific lookups live on the extension traits below; the
/// resources compose this interface rather than inheriting from a base
/// implementation.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Persist a new entity. Fails with [`StoreError::Conflict`] if the
    /// store's uniqueness constraints are violated.
    async fn insert(&self, entity: T) -> Result<T, StoreError>;

    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<T>, StoreError>;

    /// Persist mutations to an existing entity. Fails with
    /// [`StoreError::NotFound`] if the entity was never inserted.
    async fn save(&self, entity: T) -> Result<T, StoreError>;

    /// Remove an entity, returning it if it existed.
    async fn delete(&self, id: &Uuid) -> Result<Option<T>, StoreError>;
}

#[async_trait]
pub trait UserStore: Repository<User> {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError>;
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait PostStore: Repository<Post> {
    async fn find_by_sender(&self, sender: &Uuid) -> Result<Vec<Post>, StoreError>;
}

#[async_trait]
pub trait CommentStore: Repository<Comment> {
    async fn find_by_post(&self, post: &Uuid) -> Result<Vec<Comment>, StoreError>;
    async fn find_by_sender(&self, sender: &Uuid) -> Result<Vec<Comment>, StoreError>;
}
