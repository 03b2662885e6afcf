use crate::config::EstimatorConfig;
use crate::error::EstimateError;
use crate::models::production::{
    DesalinationCalculationRequest, DesalinationResult, HydroCalculationRequest, HydroResult,
    SolarCalculationRequest, SolarResult, WindCalculationRequest, WindResult,
};
use crate::models::scenario::{ScenarioRequest, ScenarioResult};
use crate::services::catalog::{require_selection, Catalog};
use crate::services::estimator::{self, non_negative};

// ─── Accepted input ranges (mirroring the calculator controls) ───────────────

const SOLAR_MAX_QUANTITY: f64 = 1000.0;
const SOLAR_MAX_ANGLE_DEG: f64 = 90.0;
const SOLAR_MAX_ORIENTATION_DEG: f64 = 360.0;
const SOLAR_MAX_SHADING_PERCENT: f64 = 50.0;
const WIND_MAX_QUANTITY: f64 = 50.0;
const WIND_MIN_HUB_HEIGHT_M: f64 = 40.0;
const WIND_MAX_HUB_HEIGHT_M: f64 = 150.0;
const HYDRO_MAX_HEAD_M: f64 = 500.0;
const HYDRO_MAX_FLOW_M3S: f64 = 50.0;
const DESALINATION_MAX_M3_DAY: f64 = 10_000.0;

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::invalid(field, value, "must be a finite number"));
    }
    if value < min || value > max {
        return Err(EstimateError::invalid(
            field,
            value,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

/// Resolves the panel and region, checks ranges, and runs the solar formula.
pub fn solar(
    catalog: &Catalog,
    cfg: &EstimatorConfig,
    req: &SolarCalculationRequest,
) -> Result<SolarResult, EstimateError> {
    let panel = catalog.solar_panel(&req.panel_id)?;
    catalog.region(&req.location)?;
    let quantity = within("quantity", req.quantity, 0.0, SOLAR_MAX_QUANTITY)?;
    // Geometry inputs are range-checked only; the baseline yield does not use them.
    within("angle", req.angle, 0.0, SOLAR_MAX_ANGLE_DEG)?;
    within("orientation", req.orientation, 0.0, SOLAR_MAX_ORIENTATION_DEG)?;
    within("shadingFactor", req.shading_factor, 0.0, SOLAR_MAX_SHADING_PERCENT)?;

    let result = estimator::calculate_solar(quantity, panel.wattage, cfg.insolation_hours)?;
    tracing::debug!(
        panel = %panel.name,
        quantity,
        daily_wh = result.production.daily_production,
        "solar estimate"
    );
    Ok(result)
}

pub fn wind(
    catalog: &Catalog,
    cfg: &EstimatorConfig,
    req: &WindCalculationRequest,
) -> Result<WindResult, EstimateError> {
    let turbine = catalog.wind_turbine(&req.turbine_id)?;
    catalog.region(&req.location)?;
    let quantity = within("quantity", req.quantity, 0.0, WIND_MAX_QUANTITY)?;
    within("hubHeight", req.hub_height, WIND_MIN_HUB_HEIGHT_M, WIND_MAX_HUB_HEIGHT_M)?;

    let result = estimator::calculate_wind(quantity, turbine.power, cfg.wind_full_load_hours)?;
    tracing::debug!(
        turbine = %turbine.name,
        quantity,
        daily_wh = result.production.daily_production,
        "wind estimate"
    );
    Ok(result)
}

/// The formula runs at the configured efficiency; the catalog efficiency of the
/// selected equipment is informational.
pub fn hydro(
    catalog: &Catalog,
    cfg: &EstimatorConfig,
    req: &HydroCalculationRequest,
) -> Result<HydroResult, EstimateError> {
    let equipment = catalog.hydro(&req.equipment_id)?;
    catalog.region(&req.location)?;
    let head = within("head", req.head, 0.0, HYDRO_MAX_HEAD_M)?;
    let flow = within("flow", req.flow, 0.0, HYDRO_MAX_FLOW_M3S)?;

    let result =
        estimator::calculate_hydro(head, flow, cfg.hydro_efficiency, cfg.hydro_hours_per_day)?;
    tracing::debug!(
        equipment = %equipment.name,
        head,
        flow,
        daily_wh = result.production.daily_production,
        "hydro estimate"
    );
    Ok(result)
}

pub fn desalination(
    catalog: &Catalog,
    req: &DesalinationCalculationRequest,
) -> Result<DesalinationResult, EstimateError> {
    let technology = catalog.desalination_technology(&req.technology_id)?;
    catalog.region(&req.location)?;
    let source = req
        .energy_source
        .ok_or_else(|| EstimateError::MissingInput("energySource".to_string()))?;
    let daily_water = within(
        "dailyWaterProduction",
        req.daily_water_production,
        0.0,
        DESALINATION_MAX_M3_DAY,
    )?;

    let result = estimator::calculate_desalination(daily_water, technology.energy_consumption)?;
    tracing::debug!(
        technology = %technology.name,
        ?source,
        daily_kwh = result.daily_energy_consumption,
        "desalination estimate"
    );
    Ok(result)
}

/// Combined scenario. Name and location are required; population and duration
/// are carried for the record and checked for sign only.
pub fn scenario(catalog: &Catalog, req: &ScenarioRequest) -> Result<ScenarioResult, EstimateError> {
    require_selection("name", &req.name)?;
    catalog.region(&req.location)?;
    non_negative("population", req.population)?;
    non_negative("duration", req.duration)?;

    let result = estimator::calculate_combined(&req.producers, &req.consumers, &req.storage)?;
    tracing::debug!(
        scenario = %req.name,
        total_production = result.total_production,
        balance = result.balance,
        "scenario estimate"
    );
    Ok(result)
}
