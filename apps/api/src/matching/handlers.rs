//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::filters::MatchFilter;
use crate::matching::scorer::CareerMatch;
use crate::models::profile::UserProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<CareerMatch>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub filter: MatchFilter,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub matches: Vec<CareerMatch>,
    /// Size of the ranked list before filtering.
    pub total_ranked: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Scores the whole catalog off the async runtime.
async fn rank(state: &AppState, profile: UserProfile) -> Result<Vec<CareerMatch>, AppError> {
    let matcher = state.matcher.clone();
    let catalog = state.catalog.clone();

    tokio::task::spawn_blocking(move || matcher.compute_matches(&profile, &catalog))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Matching task failed: {e}")))
}

/// POST /api/v1/matches
///
/// Ranks the catalog for the submitted profile. Any profile is accepted,
/// including an empty one.
pub async fn handle_compute_matches(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let matches = rank(&state, request.profile).await?;

    info!(
        "Computed {} matches (top: {})",
        matches.len(),
        matches
            .first()
            .map(|m| format!("{} {}%", m.career, m.match_percentage))
            .unwrap_or_else(|| "none".to_string())
    );

    let total = matches.len();
    Ok(Json(MatchResponse { matches, total }))
}

/// POST /api/v1/matches/search
///
/// Ranks, then applies the display filter and window.
pub async fn handle_search_matches(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let ranked = rank(&state, request.profile).await?;
    let matches: Vec<CareerMatch> = request
        .filter
        .apply(&ranked)
        .into_iter()
        .cloned()
        .collect();

    info!(
        "Match search kept {} of {} ranked careers",
        matches.len(),
        ranked.len()
    );

    Ok(Json(SearchResponse {
        matches,
        total_ranked: ranked.len(),
    }))
}
