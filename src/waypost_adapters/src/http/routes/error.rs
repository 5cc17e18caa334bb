use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use waypost_application::{LoginError, LogoutError, RefreshError, RegisterError};
use waypost_core::{
    EmailError, PasswordError, PasswordHashError, StoreError, TokenError, UsernameError,
};

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<UsernameError> for ApiError {
    fn from(error: UsernameError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Conflict => ApiError::Conflict(error.to_string()),
            StoreError::NotFound => ApiError::NotFound(error.to_string()),
            StoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<PasswordHashError> for ApiError {
    fn from(error: PasswordHashError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            // The verification sub-kinds stay distinguishable in tests but
            // all collapse to the same response here.
            TokenError::Malformed | TokenError::Expired | TokenError::SignatureMismatch => {
                ApiError::Unauthorized(String::from("invalid refresh token"))
            }
            TokenError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::EmailTaken => ApiError::Conflict(error.to_string()),
            RegisterError::Store(e) => e.into(),
            RegisterError::Hash(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::IncorrectEmail | LoginError::IncorrectPassword => {
                ApiError::Unauthorized(error.to_string())
            }
            LoginError::Store(e) => e.into(),
            LoginError::Hash(e) => e.into(),
            LoginError::Token(e) => e.into(),
        }
    }
}

impl From<LogoutError> for ApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::UserNotFound | LogoutError::TokenNotRecognized => {
                ApiError::Unauthorized(error.to_string())
            }
            LogoutError::Token(e) => e.into(),
            LogoutError::Store(e) => e.into(),
        }
    }
}

impl From<RefreshError> for ApiError {
    fn from(error: RefreshError) -> Self {
        match error {
            RefreshError::UserNotFound | RefreshError::TokenNotRecognized => {
                ApiError::Unauthorized(error.to_string())
            }
            RefreshError::Token(e) => e.into(),
            RefreshError::Store(e) => e.into(),
        }
    }
}
