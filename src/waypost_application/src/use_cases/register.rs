use waypost_core::{
    Email, Password, PasswordHashError, PasswordHasher, StoreError, User, UserStore, Username,
};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("email already exists")]
    EmailTaken,
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("{0}")]
    Hash(#[from] PasswordHashError),
}

/// Register use case - creates a new user with a hashed password and no
/// active sessions.
pub struct RegisterUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: U,
    password_hasher: H,
}

impl<U, H> RegisterUseCase<U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, password_hasher: H) -> Self {
        Self {
            user_store,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// The created user, or `RegisterError::EmailTaken` if the email is
    /// already registered. A username collision surfaces as a store
    /// conflict from `insert`.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        username: Username,
        password: Password,
    ) -> Result<User, RegisterError> {
        if self.user_store.find_by_email(&email).await?.is_some() {
            return Err(RegisterError::EmailTaken);
        }

        let password_hash = self.password_hasher.hash(&password).await?;
        let user = User::new(email, username, password_hash);

        Ok(self.user_store.insert(user).await?)
    }
}
