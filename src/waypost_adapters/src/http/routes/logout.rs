use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse};
use waypost_application::LogoutUseCase;
use waypost_core::{TokenService, UserStore};

use super::error::ApiError;
use super::extract_bearer_token;

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout<U, T>(
    State((user_store, token_service)): State<(U, T)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let refresh_token = extract_bearer_token(&headers)?;

    let use_case = LogoutUseCase::new(user_store, token_service);
    use_case.execute(refresh_token).await?;

    Ok(StatusCode::OK)
}
