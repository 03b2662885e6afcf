use axum::{extract::State, Json};

use crate::models::equipment::{
    DesalinationTechnologyList, EquipmentList, HydroEquipmentList, RegionList, SolarPanelList,
    WindTurbineList,
};
use crate::shared_state::AppState;

/// GET /api/solar/panels
#[utoipa::path(
    get,
    path = "/api/solar/panels",
    responses((status = 200, description = "Solar panel catalog", body = SolarPanelList))
)]
pub async fn list_solar_panels(State(state): State<AppState>) -> Json<SolarPanelList> {
    Json(SolarPanelList { panels: state.catalog.solar_panels().to_vec() })
}

/// GET /api/wind/turbines
#[utoipa::path(
    get,
    path = "/api/wind/turbines",
    responses((status = 200, description = "Wind turbine catalog", body = WindTurbineList))
)]
pub async fn list_wind_turbines(State(state): State<AppState>) -> Json<WindTurbineList> {
    Json(WindTurbineList { turbines: state.catalog.wind_turbines().to_vec() })
}

/// GET /api/hydro/equipment
#[utoipa::path(
    get,
    path = "/api/hydro/equipment",
    responses((status = 200, description = "Hydro equipment catalog", body = HydroEquipmentList))
)]
pub async fn list_hydro_equipment(State(state): State<AppState>) -> Json<HydroEquipmentList> {
    Json(HydroEquipmentList { equipment: state.catalog.hydro_equipment().to_vec() })
}

/// GET /api/desalination/technologies
#[utoipa::path(
    get,
    path = "/api/desalination/technologies",
    responses((status = 200, description = "Desalination technologies", body = DesalinationTechnologyList))
)]
pub async fn list_desalination_technologies(
    State(state): State<AppState>,
) -> Json<DesalinationTechnologyList> {
    Json(DesalinationTechnologyList {
        technologies: state.catalog.desalination_technologies().to_vec(),
    })
}

/// GET /api/equipment
/// All solar, wind and hydro equipment in one uniform shape
#[utoipa::path(
    get,
    path = "/api/equipment",
    responses((status = 200, description = "Uniform equipment records", body = EquipmentList))
)]
pub async fn list_equipment(State(state): State<AppState>) -> Json<EquipmentList> {
    Json(EquipmentList { equipment: state.catalog.equipment_specs() })
}

/// GET /api/regions
/// Site parameters per region
#[utoipa::path(
    get,
    path = "/api/regions",
    responses((status = 200, description = "Regions with site parameters", body = RegionList))
)]
pub async fn list_regions(State(state): State<AppState>) -> Json<RegionList> {
    Json(RegionList { regions: state.catalog.regions().to_vec() })
}
