//! Axum route handlers for the Profile API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;
use crate::profile::options::{
    Question, TraitGroup, DECISION_TREE, INTEREST_OPTIONS, SKILL_OPTIONS, TRAIT_GROUPS,
    VALUE_KEYS,
};
use crate::profile::readiness::{check_readiness, Readiness};

#[derive(Debug, Serialize)]
pub struct ProfileOptionsResponse {
    pub traits: &'static [TraitGroup],
    pub skills: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub values: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct DecisionTreeResponse {
    pub questions: &'static [Question],
}

#[derive(Debug, Deserialize)]
pub struct ReadinessRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub profile: UserProfile,
}

/// GET /api/v1/profile/options
pub async fn handle_profile_options() -> Json<ProfileOptionsResponse> {
    Json(ProfileOptionsResponse {
        traits: TRAIT_GROUPS,
        skills: SKILL_OPTIONS,
        interests: INTEREST_OPTIONS,
        values: VALUE_KEYS,
    })
}

/// GET /api/v1/decision-tree
pub async fn handle_decision_tree() -> Json<DecisionTreeResponse> {
    Json(DecisionTreeResponse {
        questions: DECISION_TREE,
    })
}

/// POST /api/v1/profile/readiness
///
/// Always 200; readiness problems are data, not errors.
pub async fn handle_readiness(Json(request): Json<ReadinessRequest>) -> Json<Readiness> {
    Json(check_readiness(request.name.as_deref(), &request.profile))
}
