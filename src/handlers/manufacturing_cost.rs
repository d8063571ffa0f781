//! Manufacturing cost report handler
//!
//! GET /api/manufacturing-costs endpoint: filtered, paginated cost rows
//! plus the filter-scoped per-type summary and grand total.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, warn};

use crate::models::manufacturing_cost::{CostReportQuery, CostReportResponse};
use crate::models::ErrorResponse;
use crate::services::cost_report;
use crate::AppState;

/// Cost ledger report
///
/// GET /api/manufacturing-costs
///
/// # Query Parameters
///
/// - `batch_id` - restrict to one manufacturing batch
/// - `cost_type` - one of labor, overhead, electricity, maintenance, other
/// - `date_from`, `date_to` - inclusive date bounds (YYYY-MM-DD)
/// - `page` - 1-based detail page (15 rows per page)
///
/// All parameters are optional; empty strings are treated as absent. The
/// summary and grand total cover every filter-matching row regardless of
/// the requested page.
pub async fn list_manufacturing_costs(
    State(state): State<AppState>,
    Query(query): Query<CostReportQuery>,
) -> Result<Json<CostReportResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (filters, page) = query.parse().map_err(|e| {
        warn!(error = %e, "Invalid cost report query");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("validation", e)),
        )
    })?;

    let report = cost_report::list_costs(&state.db, &filters, page)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query cost report");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("database", format!("Database error: {}", e))),
            )
        })?;

    info!(
        page,
        rows = report.rows.len(),
        total_rows = report.pagination.total_rows,
        "Cost report returned"
    );

    Ok(Json(report))
}
