use serde::Serialize;
use uuid::Uuid;

use crate::ports::repositories::Entity;

/// A post authored by a user.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub description: String,
    pub location: String,
    pub sender: Uuid,
}

impl Post {
    pub fn new(description: String, location: String, sender: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            location,
            sender,
        }
    }
}

impl Entity for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}
