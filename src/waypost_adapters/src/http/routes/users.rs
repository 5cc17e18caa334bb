use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use waypost_core::{Email, UserStore, Username};

use super::error::ApiError;
use super::register::UserResponse;

#[tracing::instrument(name = "Get all users", skip_all)]
pub async fn get_users<U>(State(user_store): State<U>) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let users = user_store.get_all().await?;

    Ok(Json(
        users.iter().map(UserResponse::from).collect::<Vec<_>>(),
    ))
}

#[tracing::instrument(name = "Get user by id", skip_all)]
pub async fn get_user<U>(
    State(user_store): State<U>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let user = user_store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("user not found")))?;

    Ok(Json(UserResponse::from(&user)))
}

/// Lookup by email answers 200 with `null` when nothing matches, so clients
/// can probe availability without handling an error status.
#[tracing::instrument(name = "Get user by email", skip_all)]
pub async fn get_user_by_email<U>(
    State(user_store): State<U>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    // An address that does not parse cannot match any stored user.
    let user = match Email::parse(email) {
        Ok(email) => user_store.find_by_email(&email).await?,
        Err(_) => None,
    };

    Ok(Json(user.as_ref().map(UserResponse::from)))
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
}

#[tracing::instrument(name = "Update user", skip_all)]
pub async fn update_user<U>(
    State(user_store): State<U>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    let mut user = user_store
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("user not found")))?;

    if let Some(email) = request.email {
        user.set_email(Email::parse(email)?);
    }
    if let Some(username) = request.username {
        user.set_username(Username::parse(username)?);
    }

    let user = user_store.save(user).await?;

    Ok(Json(UserResponse::from(&user)))
}

#[tracing::instrument(name = "Delete user", skip_all)]
pub async fn delete_user<U>(
    State(user_store): State<U>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    user_store
        .delete(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("user not found")))?;

    Ok(String::from("user deleted"))
}
