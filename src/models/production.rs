use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Requests ────────────────────────────────────────────────────────────────

fn default_angle() -> f64 { 30.0 }
fn default_orientation() -> f64 { 180.0 }
fn default_hub_height() -> f64 { 80.0 }

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolarCalculationRequest {
    #[serde(default)]
    pub panel_id: String,
    pub quantity: f64,
    /// Region id from `/api/regions`
    #[serde(default)]
    pub location: String,
    /// Tilt angle (deg). Validated, not applied to the yield.
    #[serde(default = "default_angle")]
    pub angle: f64,
    /// Azimuth (deg, 180 = south). Validated, not applied to the yield.
    #[serde(default = "default_orientation")]
    pub orientation: f64,
    /// Shading loss (%). Validated, not applied to the yield.
    #[serde(default)]
    pub shading_factor: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WindCalculationRequest {
    #[serde(default)]
    pub turbine_id: String,
    pub quantity: f64,
    #[serde(default)]
    pub location: String,
    /// Hub height (m). Validated, not applied to the yield.
    #[serde(default = "default_hub_height")]
    pub hub_height: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HydroCalculationRequest {
    #[serde(default)]
    pub equipment_id: String,
    /// Head (m)
    pub head: f64,
    /// Flow (m³/s)
    pub flow: f64,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergySource {
    Solar,
    Wind,
    Hydro,
    Combined,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesalinationCalculationRequest {
    #[serde(default)]
    pub technology_id: String,
    /// Daily water output (m³/day)
    pub daily_water_production: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub energy_source: Option<EnergySource>,
}

// ─── Results ─────────────────────────────────────────────────────────────────

/// Shared derivation chain of every single-technology calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductionFigures {
    /// Wh/day
    pub daily_production: f64,
    /// Wh, 30-day month
    pub monthly_production: f64,
    /// Wh, 365-day year
    pub yearly_production: f64,
    /// tons CO₂/year
    pub co2_savings: f64,
    /// €/year
    pub financial_savings: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolarResult {
    #[serde(flatten)]
    pub production: ProductionFigures,
    /// W
    pub peak_power: f64,
    pub capacity_factor: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindResult {
    #[serde(flatten)]
    pub production: ProductionFigures,
    pub capacity_factor: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HydroResult {
    #[serde(flatten)]
    pub production: ProductionFigures,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesalinationResult {
    /// m³/day
    pub daily_water_production: f64,
    pub monthly_water_production: f64,
    pub yearly_water_production: f64,
    /// kWh/day
    pub daily_energy_consumption: f64,
    pub monthly_energy_consumption: f64,
    pub yearly_energy_consumption: f64,
    /// €/year
    pub water_cost_savings: f64,
    /// €/year
    pub operational_cost: f64,
    /// €/year, water savings minus operational cost
    pub net_savings: f64,
    pub autonomy_percentage: f64,
    /// €, installed unit
    pub system_cost: f64,
}
