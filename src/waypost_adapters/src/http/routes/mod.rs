pub mod comments;
pub mod error;
pub mod login;
pub mod logout;
pub mod posts;
pub mod refresh;
pub mod register;
pub mod users;

pub use comments::{
    CreateCommentRequest, UpdateCommentRequest, create_comment, delete_comment, get_comment,
    get_comments, get_comments_by_post, get_comments_by_sender, update_comment,
};
pub use error::{ApiError, ErrorResponse};
pub use login::{LoginRequest, TokenPairResponse, login};
pub use logout::logout;
pub use posts::{
    CreatePostRequest, PostsQuery, UpdatePostRequest, create_post, delete_post, get_post,
    get_posts, update_post,
};
pub use refresh::refresh;
pub use register::{RegisterRequest, UserResponse, register};
pub use users::{UpdateUserRequest, delete_user, get_user, get_user_by_email, get_users, update_user};

use axum::http::{HeaderMap, header};

/// Pull the refresh token out of `Authorization: Bearer <token>`.
pub(crate) fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized(String::from("refresh token is required")))
}
