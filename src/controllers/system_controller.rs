use axum::{extract::State, Json};

use crate::models::system::HealthStatus;
use crate::shared_state::AppState;

/// GET /api/health
/// Liveness and build version
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthStatus))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        saved_scenarios: state.scenario_count(),
    })
}
