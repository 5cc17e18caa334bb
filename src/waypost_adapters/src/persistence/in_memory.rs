//! In-memory stores backed by `Arc<RwLock<HashMap>>`.
//!
//! The stores are `Clone` so a single instance constructed at startup can
//! be handed to every route that needs it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;
use waypost_core::{
    Comment, CommentStore, Email, Entity, Post, PostStore, Repository, StoreError, User,
    UserStore, Username,
};

#[derive(Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Repository<User> for InMemoryUserStore {
    #[tracing::instrument(name = "Adding user to store", skip_all)]
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        // Email and username are each unique across all users.
        if users
            .values()
            .any(|u| u.email() == user.email() || u.username() == user.username())
        {
            return Err(StoreError::Conflict);
        }
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn get_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    #[tracing::instrument(name = "Saving user mutations", skip_all)]
    async fn save(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id()) {
            return Err(StoreError::NotFound);
        }
        // Uniqueness holds on every write: an update must not take over
        // another user's email or username.
        if users.values().any(|u| {
            u.id() != user.id() && (u.email() == user.email() || u.username() == user.username())
        }) {
            return Err(StoreError::Conflict);
        }
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.write().await.remove(id))
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
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
pub struct InMemoryPostStore {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Repository<Post> for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        self.posts.write().await.insert(post.id(), post.clone());
        Ok(post)
    }

    async fn get_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        if !posts.contains_key(&post.id()) {
            return Err(StoreError::NotFound);
        }
        posts.insert(post.id(), post.clone());
        Ok(post)
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.write().await.remove(id))
    }
}

#[async_trait::async_trait]
impl PostStore for InMemoryPostStore {
    async fn find_by_sender(&self, sender: &Uuid) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .posts
            .read()
            .await
            .values()
            .filter(|p| &p.sender == sender)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryCommentStore {
    comments: Arc<RwLock<HashMap<Uuid, Comment>>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Repository<Comment> for InMemoryCommentStore {
    async fn insert(&self, comment: Comment) -> Result<Comment, StoreError> {
        self.comments
            .write()
            .await
            .insert(comment.id(), comment.clone());
        Ok(comment)
    }

    async fn get_all(&self) -> Result<Vec<Comment>, StoreError> {
        Ok(self.comments.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Comment>, StoreError> {
        Ok(self.comments.read().await.get(id).cloned())
    }

    async fn save(&self, comment: Comment) -> Result<Comment, StoreError> {
        let mut comments = self.comments.write().await;
        if !comments.contains_key(&comment.id()) {
            return Err(StoreError::NotFound);
        }
        comments.insert(comment.id(), comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<Comment>, StoreError> {
        Ok(self.comments.write().await.remove(id))
    }
}

#[async_trait::async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn find_by_post(&self, post: &Uuid) -> Result<Vec<Comment>, StoreError> {
        Ok(self
            .comments
            .read()
            .await
            .values()
            .filter(|c| &c.post == post)
            .cloned()
            .collect())
    }

    async fn find_by_sender(&self, sender: &Uuid) -> Result<Vec<Comment>, StoreError> {
        Ok(self
            .comments
            .read()
            .await
            .values()
            .filter(|c| &c.sender == sender)
            .cloned()
            .collect())
    }
}
