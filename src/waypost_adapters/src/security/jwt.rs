use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use waypost_core::{TokenError, TokenService};

/// Claims carried by a short-lived access token.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    sub: String,
    exp: usize,
}

/// Claims carried by a refresh token. There is deliberately no `exp`:
/// revocation happens through the per-user active set, not through expiry.
/// `jti` makes every issued token unique so rotation always produces a new
/// string even within the same second.
#[derive(Debug, Serialize, Deserialize)]
struct RefreshClaims {
    sub: String,
    iat: usize,
    jti: Uuid,
}

/// HS256 token service with distinct access and refresh secrets.
#[derive(Clone)]
pub struct JwtTokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl_seconds: i64,
}

impl JwtTokenService {
    pub fn new(
        access_secret: &Secret<String>,
        refresh_secret: &Secret<String>,
        access_ttl_seconds: i64,
    ) -> Self {
        let access = access_secret.expose_secret().as_bytes();
        let refresh = refresh_secret.expose_secret().as_bytes();

        Self {
            access_encoding: EncodingKey::from_secret(access),
            access_decoding: DecodingKey::from_secret(access),
            refresh_encoding: EncodingKey::from_secret(refresh),
            refresh_decoding: DecodingKey::from_secret(refresh),
            access_ttl_seconds,
        }
    }

    fn refresh_validation() -> Validation {
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue_access_token(&self, subject: Uuid) -> Result<String, TokenError> {
        let delta = chrono::Duration::try_seconds(self.access_ttl_seconds).ok_or(
            TokenError::UnexpectedError("access token TTL out of range".to_string()),
        )?;
        let exp = Utc::now()
            .checked_add_signed(delta)
            .ok_or(TokenError::UnexpectedError(
                "access token expiry out of range".to_string(),
            ))?
            .timestamp() as usize;

        let claims = AccessClaims {
            sub: subject.to_string(),
            exp,
        };

        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|e| TokenError::UnexpectedError(e.to_string()))
    }

    fn issue_refresh_token(&self, subject: Uuid) -> Result<String, TokenError> {
        let claims = RefreshClaims {
            sub: subject.to_string(),
            iat: Utc::now().timestamp() as usize,
            jti: Uuid::new_v4(),
        };

        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|e| TokenError::UnexpectedError(e.to_string()))
    }

    fn verify_access_token(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = decode::<AccessClaims>(token, &self.access_decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(map_jwt_error)?;

        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Malformed)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = decode::<RefreshClaims>(
            token,
            &self.refresh_decoding,
            &Self::refresh_validation(),
        )
        .map(|data| data.claims)
        .map_err(map_jwt_error)?;

        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Malformed)
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
        _ => TokenError::Malformed,
    }
}
