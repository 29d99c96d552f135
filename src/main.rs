//! Starts the HTTP server for the voucher engine.

use vt_engine::api::{AppState, create_router};
use vt_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_dir =
        std::env::var("VT_ENGINE_CONFIG").unwrap_or_else(|_| "./config/default".to_string());
    let config = ConfigLoader::load(&config_dir).map_err(|e| {
        tracing::error!(config_dir = %config_dir, "Failed to load configuration: {e}");
        e
    })?;

    let addr = config.bind_address().to_string();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Voucher engine listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
