mod catalog;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod profile;
mod report;
mod routes;
mod simulation;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::WeightedCareerMatcher;
use crate::routes::build_router;
use crate::simulation::{CareerSimulator, GeminiProjectionSource};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numbers)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerSim API v{}", env!("CARGO_PKG_VERSION"));

    // Load and validate the career catalog
    let catalog = Arc::new(CareerCatalog::load(config.catalog_path.as_deref())?);

    // Initialize matcher (WeightedCareerMatcher by default)
    let matcher = Arc::new(WeightedCareerMatcher::default());
    info!("Career matcher initialized (weights: {:?})", matcher.weights());

    // Simulations are model-backed only when a key is configured
    let simulator = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone());
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            CareerSimulator::new(
                Some(Arc::new(GeminiProjectionSource::new(llm))),
                Duration::from_millis(config.simulation_delay_ms),
            )
        }
        None => {
            warn!("GEMINI_API_KEY not set, simulations use the offline generator");
            CareerSimulator::offline()
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog,
        matcher,
        simulator,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
