use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::controllers::{
    calculator_controller::{
        calculate_desalination, calculate_hydro, calculate_scenario, calculate_solar,
        calculate_wind,
    },
    catalog_controller::{
        list_desalination_technologies, list_equipment, list_hydro_equipment, list_regions,
        list_solar_panels, list_wind_turbines,
    },
    dashboard_controller::dashboard_overview,
    scenario_controller::{delete_scenario, list_scenarios, save_scenario},
    system_controller::health,
};
use crate::shared_state::AppState;

/// Build the `/api/*` sub-router.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Calculators
        .route("/solar/panels",                 get(list_solar_panels))
        .route("/solar/calculate",              post(calculate_solar))
        .route("/wind/turbines",                get(list_wind_turbines))
        .route("/wind/calculate",               post(calculate_wind))
        .route("/hydro/equipment",              get(list_hydro_equipment))
        .route("/hydro/calculate",              post(calculate_hydro))
        .route("/desalination/technologies",    get(list_desalination_technologies))
        .route("/desalination/calculate",       post(calculate_desalination))
        // Reference data
        .route("/equipment",                    get(list_equipment))
        .route("/regions",                      get(list_regions))
        .route("/regions/greece",               get(list_regions))
        // Scenarios
        .route("/scenarios/calculate",          post(calculate_scenario))
        .route("/scenarios",                    get(list_scenarios).post(save_scenario))
        .route("/scenarios/{id}",               delete(delete_scenario))
        // Dashboard
        .route("/dashboard/overview",           get(dashboard_overview))
        // System
        .route("/health",                       get(health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EstimatorConfig;
    use crate::services::catalog::Catalog;
    use approx::assert_relative_eq;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        api_routes(AppState::new(Catalog::seed(), EstimatorConfig::default()))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_solar_calculate_camel_case_contract() {
        let (status, body) = send(
            app(),
            "POST",
            "/solar/calculate",
            Some(json!({
                "panelId": "1", "quantity": 100, "location": "1",
                "angle": 30, "orientation": 180, "shadingFactor": 0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dailyProduction"], 220_000.0);
        assert_eq!(body["monthlyProduction"], 6_600_000.0);
        assert_eq!(body["yearlyProduction"], 80_300_000.0);
        assert_eq!(body["peakPower"], 40_000.0);
        assert_eq!(body["capacityFactor"], 0.18);
        assert_relative_eq!(body["co2Savings"].as_f64().unwrap(), 40_150.0, max_relative = 1e-12);
        assert_relative_eq!(
            body["financialSavings"].as_f64().unwrap(),
            9_636_000.0,
            max_relative = 1e-12
        );
    }

    #[tokio::test]
    async fn test_solar_missing_panel_is_400() {
        let (status, body) = send(
            app(),
            "POST",
            "/solar/calculate",
            Some(json!({ "quantity": 10, "location": "1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "MissingInput");
    }

    #[tokio::test]
    async fn test_unknown_turbine_is_422() {
        let (status, body) = send(
            app(),
            "POST",
            "/wind/calculate",
            Some(json!({ "turbineId": "99", "quantity": 1, "location": "1" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "CalculationFailure");
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let (status, body) = send(
            app(),
            "POST",
            "/hydro/calculate",
            Some(json!({ "equipmentId": "1", "head": "tall", "flow": 2.0, "location": "1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BadRequest");
    }

    #[tokio::test]
    async fn test_hydro_calculate() {
        let (status, body) = send(
            app(),
            "POST",
            "/hydro/calculate",
            Some(json!({ "equipmentId": "4", "head": 50, "flow": 2.0, "location": "2" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_relative_eq!(body["dailyProduction"].as_f64().unwrap(), 20_012.4, max_relative = 1e-9);
        assert_eq!(body["efficiency"], 0.85);
    }

    #[tokio::test]
    async fn test_desalination_calculate() {
        let (status, body) = send(
            app(),
            "POST",
            "/desalination/calculate",
            Some(json!({
                "technologyId": "ro", "dailyWaterProduction": 1000,
                "location": "6", "energySource": "wind"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dailyEnergyConsumption"], 3_500.0);
        assert_eq!(body["waterCostSavings"], 730_000.0);
        assert_eq!(body["autonomyPercentage"], 85.0);
        assert_eq!(body["systemCost"], 500_000.0);
    }

    #[tokio::test]
    async fn test_desalination_water_above_range_is_400() {
        let (status, body) = send(
            app(),
            "POST",
            "/desalination/calculate",
            Some(json!({
                "technologyId": "ro", "dailyWaterProduction": 20_000,
                "location": "6", "energySource": "solar"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "InvalidInput");
    }

    #[tokio::test]
    async fn test_scenario_zero_config_costs_use_defaults() {
        let (status, body) = send(
            app(),
            "POST",
            "/scenarios/calculate",
            Some(json!({
                "name": "Zero config", "location": "1", "population": 10, "duration": 20,
                "producers": {
                    "solarPanels": 10,
                    "solarConfig": { "efficiency": 0, "angle": 0, "cost": 0 },
                    "hydroTurbines": 1,
                    "hydroConfig": { "head": 0, "flow": 0 }
                }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["solarDetails"]["efficiency"], 20.0);
        assert_eq!(body["solarDetails"]["angle"], 30.0);
        assert_eq!(body["hydroDetails"]["head"], 50.0);
        assert_eq!(body["hydroDetails"]["flow"], 2.0);
        assert_eq!(body["equipmentCosts"]["solar"], 5_000.0);
    }

    #[tokio::test]
    async fn test_scenario_calculate_reference() {
        let (status, body) = send(
            app(),
            "POST",
            "/scenarios/calculate",
            Some(json!({
                "name": "Crete Combined System",
                "location": "3",
                "population": 1000,
                "duration": 25,
                "producers": {
                    "solarPanels": 100, "windTurbines": 5, "hydroTurbines": 2,
                    "windConfig": { "hubHeight": 100 }
                },
                "storage": { "batteries": 50, "hydrogenStorage": 10 },
                "consumers": { "buildings": 200, "evChargers": 20, "desalinationPlant": 1 }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalProduction"], 26_600_000.0);
        assert_eq!(body["totalConsumption"], 2_600_000.0);
        assert_eq!(body["balance"], 24_000_000.0);
        assert_eq!(body["storageCapacity"], 15_000.0);
        assert!(body["solarDetails"].is_null());
        assert_eq!(body["windDetails"]["hubHeight"], 100.0);
        assert_eq!(body["windDetails"]["production"], 10_000_000.0);
        assert_eq!(body["equipmentCosts"]["wind"], 7_500_000.0);
    }

    #[tokio::test]
    async fn test_catalog_endpoints() {
        let (status, body) = send(app(), "GET", "/solar/panels", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["panels"].as_array().unwrap().len(), 4);
        assert_eq!(body["panels"][0]["type"], "monocrystalline");
        assert_eq!(body["panels"][3]["isCustom"], true);

        let (_, body) = send(app(), "GET", "/regions", None).await;
        assert_eq!(body["regions"][0]["nameEn"], "Athens");
        let (status, greece) = send(app(), "GET", "/regions/greece", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(greece, body);

        let (_, body) = send(app(), "GET", "/equipment", None).await;
        assert_eq!(body["equipment"].as_array().unwrap().len(), 12);
        assert_eq!(body["equipment"][0]["category"], "solar");
        assert_eq!(body["equipment"][0]["efficiencyOrPower"], 400.0);
    }

    #[tokio::test]
    async fn test_scenario_history_round() {
        let state = AppState::new(Catalog::seed(), EstimatorConfig::default());

        let (status, body) = send(
            api_routes(state.clone()),
            "POST",
            "/scenarios",
            Some(json!({
                "name": "Rhodes Hydro Plant", "type": "Hydro", "location": "5",
                "configuration": { "head": 50 },
                "results": { "yearlyProduction": 7_304_526.0, "co2Savings": 3652.263 }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        let id = body["scenarioId"].as_str().unwrap().to_string();

        let (_, body) = send(api_routes(state.clone()), "GET", "/scenarios", None).await;
        let scenarios = body["scenarios"].as_array().unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0]["type"], "Hydro");
        assert_eq!(scenarios[0]["energy"], 7_304_526.0);

        let uri = format!("/scenarios/{id}");
        let (status, _) = send(api_routes(state.clone()), "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(api_routes(state), "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NotFound");
    }

    #[tokio::test]
    async fn test_dashboard_overview_tracks_history() {
        let state = AppState::new(Catalog::seed(), EstimatorConfig::default());

        let (status, body) = send(api_routes(state.clone()), "GET", "/dashboard/overview", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["savedScenarios"], 0);
        assert_eq!(body["recentCalculations"], json!([]));

        send(
            api_routes(state.clone()),
            "POST",
            "/scenarios",
            Some(json!({
                "name": "Athens Solar Farm", "type": "Solar", "location": "1",
                "results": { "yearlyProduction": 80_300_000.0, "co2Savings": 40_150.0 }
            })),
        )
        .await;

        let (_, body) = send(api_routes(state), "GET", "/dashboard/overview", None).await;
        assert_eq!(body["stats"]["savedScenarios"], 1);
        assert_eq!(body["stats"]["totalEnergy"], 80_300_000.0);
        assert_eq!(body["stats"]["co2Savings"], 40_150.0);
        let recent = &body["recentCalculations"][0];
        assert_eq!(recent["type"], "Solar");
        assert_eq!(recent["location"], "Athens");
        assert_eq!(recent["energy"], 80_300_000.0);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["savedScenarios"], 0);
    }
}
