//! somm-pair - Wine Recommendation Microservice
//!
//! Accepts dish names over HTTP, consults the pairing vendor and LLM
//! collaborators, and always answers with one recommendation per
//! dish. Runs degraded (mock recommendations, untranslated names)
//! when credentials are absent.

use anyhow::Result;
use somm_common::config::PairConfig;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use somm_pair::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting somm-pair (Wine Recommendation) microservice");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve configuration (ENV -> TOML -> defaults)
    let config = PairConfig::load()?;
    info!("Batch size: {}", config.batch_size);

    // Construct collaborator clients and application state
    let state = AppState::from_config(&config)?;

    // Build router
    let app = somm_pair::build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Listening on http://{}", config.bind_address);
    info!("Health check: http://{}/health", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
