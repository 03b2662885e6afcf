use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::models::dashboard::DashboardOverview;
use crate::shared_state::AppState;

/// GET /api/dashboard/overview
/// History totals and the most recent saved calculations
#[utoipa::path(
    get,
    path = "/api/dashboard/overview",
    responses(
        (status = 200, description = "Dashboard stats and recent calculations", body = DashboardOverview),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn dashboard_overview(
    State(state): State<AppState>,
) -> Result<Json<DashboardOverview>, ApiError> {
    Ok(Json(state.dashboard_overview()?))
}
