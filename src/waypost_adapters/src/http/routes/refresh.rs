use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use waypost_application::RefreshUseCase;
use waypost_core::{TokenService, UserStore};

use super::error::ApiError;
use super::extract_bearer_token;
use super::login::TokenPairResponse;

#[tracing::instrument(name = "Refresh", skip_all)]
pub async fn refresh<U, T>(
    State((user_store, token_service)): State<(U, T)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let refresh_token = extract_bearer_token(&headers)?;

    let use_case = RefreshUseCase::new(user_store, token_service);
    let pair = use_case.execute(refresh_token).await?;

    Ok(Json(TokenPairResponse::from(pair)))
}
