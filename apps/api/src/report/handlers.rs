//! Axum route handlers for the Report API.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::simulation::CareerSimulation;
use crate::report::analysis::{compare, ComparativeAnalysis};
use crate::report::text::render_text_report;
use crate::report::{report_filename, ReportUser};

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub user: ReportUser,
    pub simulations: Vec<CareerSimulation>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub filename: String,
    pub comparative_analysis: ComparativeAnalysis,
    pub text: String,
}

/// POST /api/v1/reports
///
/// Builds the comparative analysis and text export for a finished session.
/// Nothing is stored; the id only labels this rendering.
pub async fn handle_create_report(
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let analysis = compare(&request.simulations).ok_or_else(|| {
        AppError::Validation("A report needs at least one simulation".to_string())
    })?;

    let report_id = Uuid::new_v4();
    let generated_at = Utc::now();
    let text = render_text_report(&request.user, &request.simulations, &analysis, generated_at);

    info!(
        "Report {report_id} generated for {} ({} careers)",
        request.user.name,
        request.simulations.len()
    );

    Ok(Json(ReportResponse {
        report_id,
        generated_at,
        filename: report_filename(&request.user.name, generated_at.date_naive()),
        comparative_analysis: analysis,
        text,
    }))
}
