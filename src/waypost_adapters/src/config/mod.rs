use secrecy::Secret;
use serde::Deserialize;

/// Environment-provided configuration.
///
/// Required variables: `JWT_SECRET`, `JWT_EXPIRATION_SECONDS`,
/// `JWT_REFRESH_SECRET`. `PORT` defaults to 3000. Missing required
/// configuration fails [`Settings::load`], which callers treat as a fatal
/// startup error - never a per-request one.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Secret used to sign access tokens.
    pub jwt_secret: Secret<String>,
    /// Access-token time to live, in seconds.
    pub jwt_expiration_seconds: i64,
    /// Distinct secret used to sign refresh tokens.
    pub jwt_refresh_secret: Secret<String>,
}

fn default_port() -> u16 {
    3000
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        // A missing .env file is fine; real environments set variables directly.
        let _ = dotenvy::dotenv();

        config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
