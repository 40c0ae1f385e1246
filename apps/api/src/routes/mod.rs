pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::report::handlers as report;
use crate::simulation::handlers as simulation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/careers", get(catalog::handle_list_careers))
        .route("/api/v1/careers/:name", get(catalog::handle_get_career))
        // Profile wizard
        .route("/api/v1/profile/options", get(profile::handle_profile_options))
        .route("/api/v1/decision-tree", get(profile::handle_decision_tree))
        .route("/api/v1/profile/readiness", post(profile::handle_readiness))
        // Matching
        .route("/api/v1/matches", post(matching::handle_compute_matches))
        .route("/api/v1/matches/search", post(matching::handle_search_matches))
        // Simulation & reporting
        .route("/api/v1/simulations", post(simulation::handle_simulate))
        .route("/api/v1/reports", post(report::handle_create_report))
        .with_state(state)
}
