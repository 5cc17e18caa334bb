use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use waypost_adapters::{
    config::Settings,
    persistence::{InMemoryCommentStore, InMemoryPostStore, InMemoryUserStore},
    security::{Argon2PasswordHasher, JwtTokenService},
};
use waypost_service::Application;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let token_service = JwtTokenService::new(
        &settings.jwt_secret,
        &settings.jwt_refresh_secret,
        settings.jwt_expiration_seconds,
    );

    let application = Application::new(
        InMemoryUserStore::new(),
        InMemoryPostStore::new(),
        InMemoryCommentStore::new(),
        Argon2PasswordHasher::new(),
        token_service,
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.port)).await?;
    application.run(listener).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
