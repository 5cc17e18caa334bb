use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use waypost_application::RegisterUseCase;
use waypost_core::{Email, Password, PasswordHasher, User, UserStore, Username};

use super::error::ApiError;

// Fields are optional so that a missing field is reported as a 400 with a
// useful message instead of a deserialization rejection.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
    pub username: Option<String>,
}

/// Public view of a user. The password hash and the refresh-token set are
/// never serialized.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().to_string(),
            username: user.username().to_string(),
        }
    }
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H>(
    State((user_store, password_hasher)): State<(U, H)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let (Some(email), Some(password), Some(username)) =
        (request.email, request.password, request.username)
    else {
        return Err(ApiError::InvalidInput(String::from(
            "missing one of the following: email, password, username",
        )));
    };

    let email = Email::parse(email)?;
    let username = Username::parse(username)?;
    let password = Password::parse(password)?;

    let use_case = RegisterUseCase::new(user_store, password_hasher);
    let user = use_case.execute(email, username, password).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
