use waypost_core::{StoreError, TokenError, TokenService, UserStore};

use crate::use_cases::login::TokenPair;

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("{0}")]
    Token(#[from] TokenError),
    #[error("user not found")]
    UserNotFound,
    #[error("refresh token not recognized")]
    TokenNotRecognized,
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Refresh use case - rotates a refresh token and issues a new access token.
///
/// A refresh token moves through `issued -> active -> rotated-out`; once
/// rotated out it never becomes usable again, and presenting it triggers
/// the same full revocation as any other unrecognized token.
pub struct RefreshUseCase<U, T>
where
    U: UserStore,
    T: TokenService,
{
    user_store: U,
    token_service: T,
}

impl<U, T> RefreshUseCase<U, T>
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

    /// Execute the refresh use case
    #[tracing::instrument(name = "RefreshUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<TokenPair, RefreshError> {
        let subject = self.token_service.verify_refresh_token(refresh_token)?;

        let Some(mut user) = self.user_store.get_by_id(&subject).await? else {
            return Err(RefreshError::UserNotFound);
        };

        if !user.has_refresh_token(refresh_token) {
            user.clear_refresh_tokens();
            self.user_store.save(user).await?;
            return Err(RefreshError::TokenNotRecognized);
        }

        let access_token = self.token_service.issue_access_token(subject)?;
        let new_refresh_token = self.token_service.issue_refresh_token(subject)?;

        user.remove_refresh_token(refresh_token);
        user.push_refresh_token(new_refresh_token.clone());
        self.user_store.save(user).await?;

        Ok(TokenPair {
            access_token,
            refresh_token: new_refresh_token,
        })
    }
}
