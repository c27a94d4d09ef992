use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coremotion_api::config::Config;
use coremotion_api::db::connect_store;
use coremotion_api::handlers::AppState;
use coremotion_api::router::build_router;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, connects the document store
/// when one is configured, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coremotion_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // A missing or unreachable store does not stop the catalog routes
    let (store, startup_error) = match connect_store(&config).await {
        Ok(store) => (store, None),
        Err(e) => {
            tracing::error!("Failed to connect to document store: {}", e);
            (None, Some(e.to_string()))
        }
    };

    let port = config.port;
    let app_state = Arc::new(AppState::new(config, store).with_startup_error(startup_error));
    let app = build_router(app_state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
