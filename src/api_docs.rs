use utoipa::OpenApi;
use crate::controllers::{
    calculator_controller, catalog_controller, dashboard_controller, scenario_controller,
    system_controller,
};
use crate::models::{dashboard, equipment, production, scenario, system};

#[derive(OpenApi)]
#[openapi(
    paths(
        calculator_controller::calculate_solar,
        calculator_controller::calculate_wind,
        calculator_controller::calculate_hydro,
        calculator_controller::calculate_desalination,
        calculator_controller::calculate_scenario,
        catalog_controller::list_solar_panels,
        catalog_controller::list_wind_turbines,
        catalog_controller::list_hydro_equipment,
        catalog_controller::list_desalination_technologies,
        catalog_controller::list_equipment,
        catalog_controller::list_regions,
        scenario_controller::list_scenarios,
        scenario_controller::save_scenario,
        scenario_controller::delete_scenario,
        dashboard_controller::dashboard_overview,
        system_controller::health
    ),
    components(
        schemas(
            equipment::EquipmentSpec,
            equipment::EquipmentCategory,
            equipment::SolarPanel,
            equipment::WindTurbine,
            equipment::HydroEquipment,
            equipment::DesalinationTechnology,
            equipment::SiteParameters,
            production::ProductionFigures,
            production::EnergySource,
            scenario::Producers,
            scenario::ConsumerLoad,
            scenario::StorageSpec,
            scenario::ScenarioType,
            dashboard::DashboardStats,
            system::HealthStatus
        )
    ),
    tags(
        (name = "renewable-calc", description = "Renewable energy production and scenario estimator")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_calculators() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/solar/calculate",
            "/api/wind/calculate",
            "/api/hydro/calculate",
            "/api/desalination/calculate",
            "/api/scenarios/calculate",
            "/api/scenarios/{id}",
            "/api/dashboard/overview",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
