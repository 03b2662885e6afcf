use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::ApiError;
use crate::models::production::{
    DesalinationCalculationRequest, DesalinationResult, HydroCalculationRequest, HydroResult,
    SolarCalculationRequest, SolarResult, WindCalculationRequest, WindResult,
};
use crate::models::scenario::{ScenarioRequest, ScenarioResult};
use crate::services::calculator_service;
use crate::shared_state::AppState;

/// POST /api/solar/calculate
/// Estimate solar production
///
/// Daily yield is `quantity × panel wattage × insolation hours`; monthly and yearly
/// figures use 30 and 365 days. Angle, orientation and shading are range-checked
/// but do not change the yield.
#[utoipa::path(
    post,
    path = "/api/solar/calculate",
    request_body = SolarCalculationRequest,
    responses(
        (status = 200, description = "Solar production estimate", body = SolarResult),
        (status = 400, description = "Missing selection or out-of-range input"),
        (status = 422, description = "Unknown panel or region")
    )
)]
pub async fn calculate_solar(
    State(state): State<AppState>,
    payload: Result<Json<SolarCalculationRequest>, JsonRejection>,
) -> Result<Json<SolarResult>, ApiError> {
    let Json(req) = payload?;
    let result = calculator_service::solar(&state.catalog, &state.estimator, &req)?;
    Ok(Json(result))
}

/// POST /api/wind/calculate
/// Estimate wind production
#[utoipa::path(
    post,
    path = "/api/wind/calculate",
    request_body = WindCalculationRequest,
    responses(
        (status = 200, description = "Wind production estimate", body = WindResult),
        (status = 400, description = "Missing selection or out-of-range input"),
        (status = 422, description = "Unknown turbine or region")
    )
)]
pub async fn calculate_wind(
    State(state): State<AppState>,
    payload: Result<Json<WindCalculationRequest>, JsonRejection>,
) -> Result<Json<WindResult>, ApiError> {
    let Json(req) = payload?;
    let result = calculator_service::wind(&state.catalog, &state.estimator, &req)?;
    Ok(Json(result))
}

/// POST /api/hydro/calculate
/// Estimate hydro production from head and flow
#[utoipa::path(
    post,
    path = "/api/hydro/calculate",
    request_body = HydroCalculationRequest,
    responses(
        (status = 200, description = "Hydro production estimate", body = HydroResult),
        (status = 400, description = "Missing selection or out-of-range input"),
        (status = 422, description = "Unknown equipment or region")
    )
)]
pub async fn calculate_hydro(
    State(state): State<AppState>,
    payload: Result<Json<HydroCalculationRequest>, JsonRejection>,
) -> Result<Json<HydroResult>, ApiError> {
    let Json(req) = payload?;
    let result = calculator_service::hydro(&state.catalog, &state.estimator, &req)?;
    Ok(Json(result))
}

/// POST /api/desalination/calculate
/// Energy demand and water economics of a desalination unit
#[utoipa::path(
    post,
    path = "/api/desalination/calculate",
    request_body = DesalinationCalculationRequest,
    responses(
        (status = 200, description = "Desalination estimate", body = DesalinationResult),
        (status = 400, description = "Missing selection or out-of-range input"),
        (status = 422, description = "Unknown technology or region")
    )
)]
pub async fn calculate_desalination(
    State(state): State<AppState>,
    payload: Result<Json<DesalinationCalculationRequest>, JsonRejection>,
) -> Result<Json<DesalinationResult>, ApiError> {
    let Json(req) = payload?;
    let result = calculator_service::desalination(&state.catalog, &req)?;
    Ok(Json(result))
}

/// POST /api/scenarios/calculate
/// Combined producer / consumer / storage balance
///
/// Uses fixed per-unit annual yields, independent of the single-technology
/// calculators. Financial savings are derived from the balance.
#[utoipa::path(
    post,
    path = "/api/scenarios/calculate",
    request_body = ScenarioRequest,
    responses(
        (status = 200, description = "Scenario balance", body = ScenarioResult),
        (status = 400, description = "Missing name/location or negative counts"),
        (status = 422, description = "Unknown region")
    )
)]
pub async fn calculate_scenario(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Result<Json<ScenarioResult>, ApiError> {
    let Json(req) = payload?;
    let result = calculator_service::scenario(&state.catalog, &req)?;
    Ok(Json(result))
}
