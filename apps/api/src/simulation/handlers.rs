//! Axum route handlers for the Simulation API.

use std::collections::HashSet;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::simulation::{CareerSimulation, SimulationProfile, SimulationRequest};
use crate::state::AppState;

/// Careers that can be projected in one request.
pub const MAX_SIMULATED_CAREERS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub careers: Vec<String>,
    #[serde(default)]
    pub profile: SimulationProfile,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub simulations: Vec<CareerSimulation>,
    pub ai_generated: usize,
}

/// POST /api/v1/simulations
///
/// Projects each selected career over ten years, in request order.
pub async fn handle_simulate(
    State(state): State<AppState>,
    Json(request): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, AppError> {
    validate_careers(&request.careers, |c| state.catalog.contains(c))?;

    let requests: Vec<SimulationRequest> = request
        .careers
        .iter()
        .map(|career| SimulationRequest {
            career: career.clone(),
            profile: request.profile.clone(),
        })
        .collect();

    let simulations = state.simulator.simulate_many(&requests).await;
    let ai_generated = simulations.iter().filter(|s| s.is_ai_generated).count();

    info!(
        "Simulated {} careers for {} ({} model-generated)",
        simulations.len(),
        request.profile.name,
        ai_generated
    );

    Ok(Json(SimulateResponse {
        simulations,
        ai_generated,
    }))
}

fn validate_careers(careers: &[String], known: impl Fn(&str) -> bool) -> Result<(), AppError> {
    if careers.is_empty() {
        return Err(AppError::Validation(
            "Select at least one career to simulate".to_string(),
        ));
    }
    if careers.len() > MAX_SIMULATED_CAREERS {
        return Err(AppError::Validation(format!(
            "At most {MAX_SIMULATED_CAREERS} careers can be simulated at once"
        )));
    }

    let mut seen = HashSet::new();
    for career in careers {
        if !seen.insert(career.as_str()) {
            return Err(AppError::Validation(format!(
                "Career '{career}' was selected more than once"
            )));
        }
        if !known(career) {
            return Err(AppError::UnprocessableEntity(format!(
                "Career '{career}' is not in the catalog"
            )));
        }
    }
    Ok(())
}
