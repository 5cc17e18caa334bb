use waypost_core::{
    Email, Password, PasswordHashError, PasswordHasher, StoreError, TokenError, TokenService,
    UserStore,
};

/// Freshly issued access/refresh token pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    // The two rejection messages are observably different, matching the
    // existing behavior; unifying them to resist user enumeration is a
    // known hardening option.
    #[error("email is incorrect")]
    IncorrectEmail,
    #[error("password is incorrect")]
    IncorrectPassword,
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Hash(#[from] PasswordHashError),
    #[error("{0}")]
    Token(#[from] TokenError),
}

/// Login use case - authenticates credentials and opens a session.
pub struct LoginUseCase<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    user_store: U,
    password_hasher: H,
    token_service: T,
}

impl<U, H, T> LoginUseCase<U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    pub fn new(user_store: U, password_hasher: H, token_service: T) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
        }
    }

    /// Execute the login use case
    ///
    /// Appends the new refresh token to the user's active set, so
    /// concurrent logins each get their own revocable session.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<TokenPair, LoginError> {
        let Some(mut user) = self.user_store.find_by_email(&email).await? else {
            return Err(LoginError::IncorrectEmail);
        };

        if !self
            .password_hasher
            .verify(&password, user.password_hash())
            .await?
        {
            return Err(LoginError::IncorrectPassword);
        }

        let access_token = self.token_service.issue_access_token(user.id())?;
        let refresh_token = self.token_service.issue_refresh_token(user.id())?;

        user.push_refresh_token(refresh_token.clone());
        self.user_store.save(user).await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
