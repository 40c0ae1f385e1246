//! Axum route handlers for the Catalog API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::career::CareerRecord;
use crate::report::format::format_salary;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerEntry {
    pub career: String,
    /// Human-readable salary range, e.g. "₹6.0L - ₹25.0L".
    pub salary_label: String,
    #[serde(flatten)]
    pub record: CareerRecord,
}

impl CareerEntry {
    fn new(career: &str, record: &CareerRecord) -> Self {
        Self {
            career: career.to_string(),
            salary_label: format!(
                "{} - {}",
                format_salary(record.min_salary()),
                format_salary(record.max_salary())
            ),
            record: record.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub careers: Vec<CareerEntry>,
    pub total: usize,
}

/// GET /api/v1/careers
///
/// The full catalog in catalog order.
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<CatalogResponse> {
    let careers: Vec<CareerEntry> = state
        .catalog
        .iter()
        .map(|(name, record)| CareerEntry::new(name, record))
        .collect();
    let total = careers.len();
    Json(CatalogResponse { careers, total })
}

/// GET /api/v1/careers/:name
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CareerEntry>, AppError> {
    state
        .catalog
        .get(&name)
        .map(|record| Json(CareerEntry::new(&name, record)))
        .ok_or_else(|| AppError::NotFound(format!("Career '{name}' not found")))
}
