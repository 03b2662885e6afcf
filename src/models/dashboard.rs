use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::scenario::ScenarioType;

/// Totals across the saved scenario history.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub saved_scenarios: usize,
    pub total_energy: f64,
    pub co2_savings: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentCalculation {
    pub id: String,
    #[serde(rename = "type")]
    pub scenario_type: ScenarioType,
    /// Region display name, or the raw location when it is not a known region
    pub location: String,
    pub date: NaiveDate,
    pub energy: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub recent_calculations: Vec<RecentCalculation>,
}
