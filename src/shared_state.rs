use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use chrono::Utc;

use crate::config::EstimatorConfig;
use crate::error::ApiError;
use crate::models::dashboard::{DashboardOverview, DashboardStats, RecentCalculation};
use crate::models::scenario::{SaveScenarioRequest, SavedScenario};
use crate::services::catalog::Catalog;

/// Entries shown in the dashboard's recent calculations panel
const RECENT_CALCULATIONS: usize = 4;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Read-only equipment and region reference data
    pub catalog: Arc<Catalog>,
    /// Operating assumptions for the per-technology formulas
    pub estimator: EstimatorConfig,
    /// Map of scenario id to saved scenario. Lives for the process lifetime only.
    pub scenarios: Arc<RwLock<HashMap<String, SavedScenario>>>,
    pub started_at: Instant,
}

/// First numeric field of `results` found under any of `keys`.
fn figure(results: &serde_json::Value, keys: &[&str]) -> f64 {
    keys.iter()
        .find_map(|k| results.get(*k).and_then(serde_json::Value::as_f64))
        .unwrap_or(0.0)
}

/// Sum of every numeric member of `results.equipmentCosts`, falling back to `systemCost`.
fn headline_cost(results: &serde_json::Value) -> f64 {
    match results.get("equipmentCosts").and_then(serde_json::Value::as_object) {
        Some(costs) => costs.values().filter_map(serde_json::Value::as_f64).sum(),
        None => figure(results, &["systemCost", "cost"]),
    }
}

fn poisoned() -> ApiError {
    ApiError::Internal("scenario store lock poisoned".to_string())
}

impl AppState {
    pub fn new(catalog: Catalog, estimator: EstimatorConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            estimator,
            scenarios: Arc::new(RwLock::new(HashMap::new())),
            started_at: Instant::now(),
        }
    }

    pub fn save_scenario(&self, req: SaveScenarioRequest) -> Result<SavedScenario, ApiError> {
        let now = Utc::now();
        let scenario = SavedScenario {
            id: format!("scenario_{}", uuid::Uuid::new_v4().simple()),
            energy: figure(&req.results, &["yearlyProduction", "totalProduction", "energy"]),
            cost: headline_cost(&req.results),
            co2_savings: figure(&req.results, &["co2Savings"]),
            name: req.name,
            scenario_type: req.scenario_type,
            location: req.location,
            date: now.date_naive(),
            saved_at: now,
            configuration: req.configuration,
            results: req.results,
        };

        let mut map = self.scenarios.write().map_err(|_| poisoned())?;
        map.insert(scenario.id.clone(), scenario.clone());
        Ok(scenario)
    }

    /// Saved scenarios, newest first.
    pub fn list_scenarios(&self) -> Result<Vec<SavedScenario>, ApiError> {
        let map = self.scenarios.read().map_err(|_| poisoned())?;
        let mut scenarios: Vec<SavedScenario> = map.values().cloned().collect();
        scenarios.sort_by(|a, b| b.saved_at.cmp(&a.saved_at).then_with(|| a.id.cmp(&b.id)));
        Ok(scenarios)
    }

    /// Returns `false` when no scenario has the given id.
    pub fn delete_scenario(&self, id: &str) -> Result<bool, ApiError> {
        let mut map = self.scenarios.write().map_err(|_| poisoned())?;
        Ok(map.remove(id).is_some())
    }

    pub fn scenario_count(&self) -> usize {
        match self.scenarios.read() {
            Ok(map) => map.len(),
            Err(_) => {
                tracing::warn!("scenario store lock poisoned, reporting zero scenarios");
                0
            }
        }
    }

    /// Totals over the whole history plus the newest few entries.
    pub fn dashboard_overview(&self) -> Result<DashboardOverview, ApiError> {
        let scenarios = self.list_scenarios()?;
        let stats = DashboardStats {
            saved_scenarios: scenarios.len(),
            total_energy: scenarios.iter().map(|s| s.energy).sum(),
            co2_savings: scenarios.iter().map(|s| s.co2_savings).sum(),
        };
        let recent_calculations = scenarios
            .into_iter()
            .take(RECENT_CALCULATIONS)
            .map(|s| RecentCalculation {
                location: self
                    .catalog
                    .region(&s.location)
                    .map(|r| r.name_en.clone())
                    .unwrap_or(s.location),
                id: s.id,
                scenario_type: s.scenario_type,
                date: s.date,
                energy: s.energy,
            })
            .collect();
        Ok(DashboardOverview { stats, recent_calculations })
    }
}
