use serde::Serialize;
use uuid::Uuid;

use crate::ports::repositories::Entity;

/// A comment on a post.
#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub post: Uuid,
    pub sender: Uuid,
}

impl Comment {
    pub fn new(content: String, post: Uuid, sender: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            post,
            sender,
        }
    }
}

impl Entity for Comment {
    fn id(&self) -> Uuid {
        self.id
    }
}
