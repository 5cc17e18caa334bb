use axum::{Json, extract::State, response::IntoResponse};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use waypost_application::{LoginUseCase, TokenPair};
use waypost_core::{Email, Password, PasswordHasher, TokenService, UserStore};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct TokenPairResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T>(
    State((user_store, password_hasher, token_service)): State<(U, H, T)>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(ApiError::InvalidInput(String::from(
            "missing email or password",
        )));
    };

    let email = Email::parse(email)?;
    let password = Password::parse(password)?;

    let use_case = LoginUseCase::new(user_store, password_hasher, token_service);
    let pair = use_case.execute(email, password).await?;

    Ok(Json(TokenPairResponse::from(pair)))
}
