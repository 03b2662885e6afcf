use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Combined scenario input ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolarMixConfig {
    pub efficiency: Option<f64>,
    pub angle: Option<f64>,
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WindMixConfig {
    pub power: Option<f64>,
    pub hub_height: Option<f64>,
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HydroMixConfig {
    pub efficiency: Option<f64>,
    pub head: Option<f64>,
    pub flow: Option<f64>,
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Producers {
    pub solar_panels: f64,
    pub wind_turbines: f64,
    pub hydro_turbines: f64,
    pub solar_config: Option<SolarMixConfig>,
    pub wind_config: Option<WindMixConfig>,
    pub hydro_config: Option<HydroMixConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumerLoad {
    pub buildings: f64,
    pub ev_chargers: f64,
    pub desalination_plant: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSpec {
    pub batteries: f64,
    pub hydrogen_storage: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub population: f64,
    /// Project lifetime (years)
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub producers: Producers,
    #[serde(default)]
    pub storage: StorageSpec,
    #[serde(default)]
    pub consumers: ConsumerLoad,
}

// ─── Combined scenario output ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolarDetails {
    pub panels: f64,
    pub efficiency: f64,
    pub angle: f64,
    pub production: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindDetails {
    pub turbines: f64,
    pub power: f64,
    pub hub_height: f64,
    pub production: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HydroDetails {
    pub units: f64,
    pub efficiency: f64,
    pub head: f64,
    pub flow: f64,
    pub production: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EquipmentCosts {
    pub solar: f64,
    pub wind: f64,
    pub hydro: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// Wh/year
    pub total_production: f64,
    /// Wh/year
    pub total_consumption: f64,
    /// total_production - total_consumption
    pub balance: f64,
    pub storage_capacity: f64,
    pub co2_savings: f64,
    /// Derived from `balance`, not from production
    pub financial_savings: f64,
    /// Days of consumption covered by storage; `null` without consumption
    pub autonomy_days: Option<f64>,
    pub solar_details: Option<SolarDetails>,
    pub wind_details: Option<WindDetails>,
    pub hydro_details: Option<HydroDetails>,
    pub equipment_costs: EquipmentCosts,
}

// ─── Scenario history ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum ScenarioType {
    Solar,
    Wind,
    Hydro,
    Desalination,
    Combined,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveScenarioRequest {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub scenario_type: ScenarioType,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub configuration: serde_json::Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub results: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SavedScenario {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub scenario_type: ScenarioType,
    pub location: String,
    pub date: NaiveDate,
    pub saved_at: DateTime<Utc>,
    /// Headline energy figure lifted from `results`
    pub energy: f64,
    /// Headline cost figure lifted from `results`
    pub cost: f64,
    pub co2_savings: f64,
    #[schema(value_type = Object)]
    pub configuration: serde_json::Value,
    #[schema(value_type = Object)]
    pub results: serde_json::Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScenarioHistory {
    pub scenarios: Vec<SavedScenario>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveScenarioResponse {
    pub success: bool,
    pub message: String,
    pub scenario_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteScenarioResponse {
    pub success: bool,
    pub message: String,
}
