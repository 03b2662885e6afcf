use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::models::scenario::{
    DeleteScenarioResponse, SaveScenarioRequest, SaveScenarioResponse, ScenarioHistory,
};
use crate::services::catalog::require_selection;
use crate::shared_state::AppState;

/// GET /api/scenarios
/// Saved scenarios, newest first
#[utoipa::path(
    get,
    path = "/api/scenarios",
    responses(
        (status = 200, description = "Scenario history", body = ScenarioHistory),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_scenarios(State(state): State<AppState>) -> Result<Json<ScenarioHistory>, ApiError> {
    let scenarios = state.list_scenarios()?;
    Ok(Json(ScenarioHistory { scenarios }))
}

/// POST /api/scenarios
/// Save a calculated scenario
#[utoipa::path(
    post,
    path = "/api/scenarios",
    request_body = SaveScenarioRequest,
    responses(
        (status = 201, description = "Scenario saved", body = SaveScenarioResponse),
        (status = 400, description = "Missing name")
    )
)]
pub async fn save_scenario(
    State(state): State<AppState>,
    payload: Result<Json<SaveScenarioRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveScenarioResponse>), ApiError> {
    let Json(req) = payload?;
    require_selection("name", &req.name)?;
    let saved = state.save_scenario(req)?;
    tracing::info!(id = %saved.id, name = %saved.name, "scenario saved");
    Ok((
        StatusCode::CREATED,
        Json(SaveScenarioResponse {
            success: true,
            message: "Scenario saved successfully".to_string(),
            scenario_id: saved.id,
        }),
    ))
}

/// DELETE /api/scenarios/{id}
#[utoipa::path(
    delete,
    path = "/api/scenarios/{id}",
    params(
        ("id" = String, Path, description = "Scenario id returned on save")
    ),
    responses(
        (status = 200, description = "Scenario deleted", body = DeleteScenarioResponse),
        (status = 404, description = "Scenario not found")
    )
)]
pub async fn delete_scenario(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteScenarioResponse>, ApiError> {
    if !state.delete_scenario(&id)? {
        return Err(ApiError::NotFound(format!("scenario {id}")));
    }
    tracing::info!(%id, "scenario deleted");
    Ok(Json(DeleteScenarioResponse {
        success: true,
        message: "Scenario deleted successfully".to_string(),
    }))
}

