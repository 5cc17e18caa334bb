pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    comment::Comment,
    email::{Email, EmailError},
    password::{Password, PasswordError},
    post::Post,
    user::User,
    username::{Username, UsernameError},
};

pub use ports::{
    repositories::{CommentStore, Entity, PostStore, Repository, StoreError, UserStore},
    services::{PasswordHashError, PasswordHasher, TokenError, TokenService},
};
