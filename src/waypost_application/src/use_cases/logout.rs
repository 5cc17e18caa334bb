use waypost_core::{StoreError, TokenError, TokenService, UserStore};

#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("user not found")]
    UserNotFound,
    #[error("refresh token not recognized")]
    TokenNotRecognized,
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Logout use case - closes the session bound to one refresh token.
pub struct LogoutUseCase<U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: U,
    token_service: T,
}

impl<U, T> LogoutUseCase<U, T>
where
    U: UserStore,
    T: TokenService,
{
    pub fn new(user_store: U, token_service: T) -> Self {
        Self {
            user_store,
            token_service,
        }
    }

    /// Execute the logout use case
    ///
    /// A well-signed token that is not in the user's active set is treated
    /// as evidence of replay: every session for that user is revoked before
    /// the request is rejected.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError> {
        let subject = self.token_service.verify_refresh_token(refresh_token)?;

        let Some(mut user) = self.user_store.get_by_id(&subject).await? else {
            return Err(LogoutError::UserNotFound);
        };

        if !user.has_refresh_token(refresh_token) {
            user.clear_refresh_tokens();
            self.user_store.save(user).await?;
            return Err(LogoutError::TokenNotRecognized);
        }

        user.remove_refresh_token(refresh_token);
        self.user_store.save(user).await?;

        Ok(())
    }
}
