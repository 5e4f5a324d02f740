//! # muse-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Muse supporter API.
//! Binds to a configurable port (default 8080).

use muse_api::state::{AppConfig, AppState};
use muse_core::ContentCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let collection_address = std::env::var("MUSE_COLLECTION_ADDRESS").ok();
    if collection_address.is_none() {
        tracing::warn!(
            "MUSE_COLLECTION_ADDRESS not set — the verification endpoint will return 500."
        );
    }
    let config = AppConfig {
        port,
        collection_address,
    };

    // Attempt to create the DAS client from environment.
    let das_client = match muse_das_client::DasConfig::from_env() {
        Ok(das_config) => {
            tracing::info!("DAS RPC client configured");
            match muse_das_client::DasClient::new(das_config) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::error!("Failed to create DAS client: {e}");
                    return Err(e.into());
                }
            }
        }
        Err(e) => {
            tracing::warn!(
                "DAS RPC client not configured: {e}. Verification and RPC forwarding will return 500."
            );
            None
        }
    };

    // Load the content catalog: JSON override file or built-in default.
    // A bad override is a startup failure, not a degraded mode — serving
    // the wrong catalog silently would be worse than not starting.
    let state = match std::env::var("MUSE_CATALOG_PATH") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| {
                tracing::error!("Failed to read catalog file {path}: {e}");
                e
            })?;
            let catalog = ContentCatalog::from_json(&json).map_err(|e| {
                tracing::error!("Invalid catalog file {path}: {e}");
                e
            })?;
            tracing::info!(%path, "Content catalog loaded from file");
            AppState::with_catalog(config, das_client, catalog)?
        }
        Err(_) => AppState::new(config, das_client),
    };

    let app = muse_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Muse supporter API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
