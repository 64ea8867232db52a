use std::sync::Arc;

use auth::TokenService;
use shop_service::config::Config;
use shop_service::create_router;
use shop_service::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shop_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "shop-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        seed_catalog = config.catalog.seed_defaults,
        "Configuration loaded"
    );

    let token_service = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration()?,
    ));
    let state = AppState::in_memory(token_service);

    if config.catalog.seed_defaults {
        let seeded = state.flower_service.seed_default_catalog()?;
        tracing::info!(flowers = seeded.len(), "Default catalog seeded");
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited");

    Ok(())
}
