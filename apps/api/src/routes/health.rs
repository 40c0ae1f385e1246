use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and what the instance is running with.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog_source = match state.config.catalog_path {
        Some(_) => "file",
        None => "embedded",
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careersim",
        "careers": state.catalog.len(),
        "catalog_source": catalog_source,
        "ai_simulations": state.simulator.has_ai_source()
    }))
}
