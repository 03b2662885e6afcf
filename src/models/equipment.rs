use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Uniform equipment record ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCategory {
    Solar,
    Wind,
    Hydro,
}

/// Technology-agnostic view of a catalog entry.
/// `efficiency_or_power` is the rating the estimator consumes: panel wattage,
/// turbine power, or hydro turbine efficiency.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSpec {
    pub id: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub efficiency_or_power: f64,
    pub cost: f64,
    pub is_custom: bool,
}

// ─── Per-technology catalog entries ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolarPanel {
    pub id: String,
    pub name: String,
    /// Cell technology: monocrystalline, polycrystalline, thin-film, custom
    #[serde(rename = "type")]
    pub panel_type: String,
    /// Module efficiency (%)
    pub efficiency: f64,
    /// Rated power (W)
    pub wattage: f64,
    pub cost: f64,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindTurbine {
    pub id: String,
    pub name: String,
    /// Rated power as consumed by the wind formula
    pub power: f64,
    /// Hub height (m)
    pub hub_height: f64,
    /// Rotor diameter (m)
    pub rotor_diameter: f64,
    pub cost: f64,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HydroEquipment {
    pub id: String,
    pub name: String,
    /// Turbine family: pelton, francis, kaplan, custom
    #[serde(rename = "type")]
    pub turbine_type: String,
    /// Turbine efficiency [0..1]
    pub efficiency: f64,
    /// Maximum flow (m³/s)
    pub max_flow: f64,
    /// Maximum head (m)
    pub max_head: f64,
    pub cost: f64,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesalinationTechnology {
    pub id: String,
    pub name: String,
    pub efficiency: f64,
    /// Specific energy consumption (kWh/m³)
    pub energy_consumption: f64,
}

/// Location-derived multipliers for one region. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteParameters {
    pub id: String,
    pub name: String,
    pub name_en: String,
    /// [latitude, longitude]
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 2],
    /// Annual solar irradiance (kWh/m²/yr)
    pub solar_irradiance: f64,
    /// Mean wind speed (m/s)
    pub wind_speed: f64,
    /// Elevation (m)
    pub elevation: f64,
}

impl From<&SolarPanel> for EquipmentSpec {
    fn from(p: &SolarPanel) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            category: EquipmentCategory::Solar,
            efficiency_or_power: p.wattage,
            cost: p.cost,
            is_custom: p.is_custom,
        }
    }
}

impl From<&WindTurbine> for EquipmentSpec {
    fn from(t: &WindTurbine) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            category: EquipmentCategory::Wind,
            efficiency_or_power: t.power,
            cost: t.cost,
            is_custom: t.is_custom,
        }
    }
}

impl From<&HydroEquipment> for EquipmentSpec {
    fn from(h: &HydroEquipment) -> Self {
        Self {
            id: h.id.clone(),
            name: h.name.clone(),
            category: EquipmentCategory::Hydro,
            efficiency_or_power: h.efficiency,
            cost: h.cost,
            is_custom: h.is_custom,
        }
    }
}

// ─── REST list wrappers ──────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct SolarPanelList {
    pub panels: Vec<SolarPanel>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WindTurbineList {
    pub turbines: Vec<WindTurbine>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HydroEquipmentList {
    pub equipment: Vec<HydroEquipment>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DesalinationTechnologyList {
    pub technologies: Vec<DesalinationTechnology>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegionList {
    pub regions: Vec<SiteParameters>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentList {
    pub equipment: Vec<EquipmentSpec>,
}
