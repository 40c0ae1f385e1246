use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::matching::CareerMatcher;
use crate::simulation::CareerSimulator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only for the life of the process.
    pub catalog: Arc<CareerCatalog>,
    /// Pluggable matcher. Default: WeightedCareerMatcher.
    pub matcher: Arc<dyn CareerMatcher>,
    pub simulator: CareerSimulator,
}
