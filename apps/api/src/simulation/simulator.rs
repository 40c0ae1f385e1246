//! Career Simulator: produces a 10-year projection per selected career.
//!
//! Tries the configured `ProjectionSource` (Gemini by default) first and
//! falls back to the offline generator on any failure, so a simulation
//! request never fails because of the model.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::models::simulation::{CareerSimulation, GenerationMethod, SimulationRequest};
use crate::simulation::mock;
use crate::simulation::prompts::{simulation_prompt, simulation_system_prompt};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A remote generator of projections. Implement this to swap models
/// without touching the simulator or handlers.
#[async_trait]
pub trait ProjectionSource: Send + Sync {
    /// Tag stamped on projections this source produces.
    fn method(&self) -> GenerationMethod;

    async fn project(&self, request: &SimulationRequest) -> Result<CareerSimulation, LlmError>;
}

/// Gemini Flash via the shared `LlmClient`.
pub struct GeminiProjectionSource {
    llm: LlmClient,
}

impl GeminiProjectionSource {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ProjectionSource for GeminiProjectionSource {
    fn method(&self) -> GenerationMethod {
        GenerationMethod::GeminiFlash
    }

    async fn project(&self, request: &SimulationRequest) -> Result<CareerSimulation, LlmError> {
        self.llm
            .call_json(&simulation_prompt(request), &simulation_system_prompt())
            .await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Simulator
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct CareerSimulator {
    source: Option<Arc<dyn ProjectionSource>>,
    /// Pause between consecutive model calls in a batch.
    request_delay: Duration,
}

impl CareerSimulator {
    pub fn new(source: Option<Arc<dyn ProjectionSource>>, request_delay: Duration) -> Self {
        Self {
            source,
            request_delay,
        }
    }

    /// Simulator that always uses the offline generator.
    pub fn offline() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn has_ai_source(&self) -> bool {
        self.source.is_some()
    }

    pub async fn simulate(&self, request: &SimulationRequest) -> CareerSimulation {
        if let Some(source) = &self.source {
            match source.project(request).await {
                Ok(simulation) => match accept(simulation, source.method()) {
                    Some(simulation) => {
                        info!(
                            "Generated {} projection for {}",
                            source.method().as_str(),
                            request.career
                        );
                        return simulation;
                    }
                    None => warn!(
                        "Model returned an incomplete projection for {}, using offline generator",
                        request.career
                    ),
                },
                Err(e) => warn!(
                    "Model projection failed for {}: {e}. Using offline generator",
                    request.career
                ),
            }
        }

        debug!("Generating offline projection for {}", request.career);
        mock::generate(request)
    }

    /// Runs requests one after another, in input order.
    pub async fn simulate_many(&self, requests: &[SimulationRequest]) -> Vec<CareerSimulation> {
        let mut simulations = Vec::with_capacity(requests.len());

        for (i, request) in requests.iter().enumerate() {
            if i > 0 && self.source.is_some() && !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }
            simulations.push(self.simulate(request).await);
        }

        simulations
    }
}

/// Accepts a model projection only when it names a career and has at least
/// one year; stamps the generation metadata.
fn accept(mut simulation: CareerSimulation, method: GenerationMethod) -> Option<CareerSimulation> {
    if simulation.career.trim().is_empty() || simulation.yearly_projections.is_empty() {
        return None;
    }
    simulation.is_ai_generated = true;
    simulation.generation_method = method;
    Some(simulation)
}
