/// ============================================================
///  Production Estimator
///
///  Closed-form yield and economics for single technologies and
///  for the combined producer/consumer/storage scenario.
///
///  Two formula families live here on purpose:
///   * per-technology calculators (solar / wind / hydro) scale a
///     daily yield by quantity, rating and operating hours;
///   * the combined scenario uses fixed per-unit annual yields.
///  They are not interchangeable: the combined view must keep its
///  fixed yields even when a matching per-technology calculator exists.
///
///  Every function is pure. No I/O, no clock, no shared state.
/// ============================================================

use crate::error::EstimateError;
use crate::models::production::{
    DesalinationResult, HydroResult, ProductionFigures, SolarResult, WindResult,
};
use crate::models::scenario::{
    ConsumerLoad, EquipmentCosts, HydroDetails, Producers, ScenarioResult, SolarDetails,
    StorageSpec, WindDetails,
};

// ─── Calendar approximation ──────────────────────────────────
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

// ─── Economics ───────────────────────────────────────────────
/// tons CO₂ avoided per unit of yearly production
pub const CO2_FACTOR: f64 = 0.0005;
/// € per unit of energy
pub const TARIFF: f64 = 0.12;
/// € per m³ of desalinated water
pub const WATER_PRICE_PER_M3: f64 = 2.0;

// ─── Per-technology defaults ─────────────────────────────────
pub const SOLAR_INSOLATION_HOURS: f64 = 5.5;
pub const SOLAR_CAPACITY_FACTOR: f64 = 0.18;
pub const WIND_FULL_LOAD_HOURS: f64 = 8.0;
pub const WIND_CAPACITY_FACTOR: f64 = 0.35;
pub const HYDRO_EFFICIENCY: f64 = 0.85;
pub const HYDRO_HOURS_PER_DAY: f64 = 24.0;
/// g, with water density already folded into the unit of the result
const HYDRO_GRAVITY: f64 = 9.81;
pub const DESALINATION_AUTONOMY_PERCENT: f64 = 85.0;
/// € for a complete desalination unit, independent of size
pub const DESALINATION_SYSTEM_COST: f64 = 500_000.0;

// ─── Combined scenario: fixed per-unit yields ────────────────
const MIX_SOLAR_WH_PER_PANEL_DAY: f64 = 400.0;
const MIX_WIND_WH_PER_TURBINE_YEAR: f64 = 2_000_000.0;
const MIX_HYDRO_WH_PER_UNIT_YEAR: f64 = 1_000_000.0;

const LOAD_PER_BUILDING: f64 = 3_000.0;
const LOAD_PER_EV_CHARGER: f64 = 50_000.0;
const LOAD_PER_DESALINATION_PLANT: f64 = 1_000_000.0;

const STORAGE_PER_BATTERY: f64 = 100.0;
const STORAGE_PER_HYDROGEN_TANK: f64 = 1_000.0;

// Defaults echoed in the scenario detail blocks
const MIX_SOLAR_EFFICIENCY: f64 = 20.0;
const MIX_SOLAR_ANGLE: f64 = 30.0;
const MIX_SOLAR_UNIT_COST: f64 = 500.0;
const MIX_WIND_POWER: f64 = 2_000_000.0;
const MIX_WIND_HUB_HEIGHT: f64 = 80.0;
const MIX_WIND_UNIT_COST: f64 = 1_500_000.0;
const MIX_HYDRO_EFFICIENCY: f64 = 0.85;
const MIX_HYDRO_HEAD: f64 = 50.0;
const MIX_HYDRO_FLOW: f64 = 2.0;
const MIX_HYDRO_UNIT_COST: f64 = 800_000.0;

/// Rejects NaN, infinities and negative numbers.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::invalid(field, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(EstimateError::invalid(field, value, "must not be negative"));
    }
    Ok(value)
}

/// A configured detail value, where an absent or zero value means "use the default".
fn configured(value: Option<f64>, fallback: f64) -> f64 {
    value.filter(|v| *v != 0.0).unwrap_or(fallback)
}

impl ProductionFigures {
    /// Derives monthly/yearly totals and savings from a daily yield.
    pub fn from_daily(daily_production: f64) -> Self {
        let yearly_production = daily_production * DAYS_PER_YEAR;
        Self {
            daily_production,
            monthly_production: daily_production * DAYS_PER_MONTH,
            yearly_production,
            co2_savings: yearly_production * CO2_FACTOR,
            financial_savings: yearly_production * TARIFF,
        }
    }
}

/// Solar yield: `quantity × wattage × insolation hours` per day.
///
/// Tilt, orientation and shading are not part of this baseline model.
pub fn calculate_solar(
    quantity: f64,
    panel_wattage: f64,
    insolation_hours: f64,
) -> Result<SolarResult, EstimateError> {
    let quantity = non_negative("quantity", quantity)?;
    let panel_wattage = non_negative("panelWattage", panel_wattage)?;
    let insolation_hours = non_negative("insolationHours", insolation_hours)?;

    Ok(SolarResult {
        production: ProductionFigures::from_daily(quantity * panel_wattage * insolation_hours),
        peak_power: quantity * panel_wattage,
        capacity_factor: SOLAR_CAPACITY_FACTOR,
    })
}

/// Wind yield: `quantity × rated power × full-load hours` per day.
///
/// The capacity factor is a fixed constant; hub height does not enter.
pub fn calculate_wind(
    quantity: f64,
    turbine_power: f64,
    full_load_hours: f64,
) -> Result<WindResult, EstimateError> {
    let quantity = non_negative("quantity", quantity)?;
    let turbine_power = non_negative("turbinePower", turbine_power)?;
    let full_load_hours = non_negative("fullLoadHours", full_load_hours)?;

    Ok(WindResult {
        production: ProductionFigures::from_daily(quantity * turbine_power * full_load_hours),
        capacity_factor: WIND_CAPACITY_FACTOR,
    })
}

/// Hydro yield: `head × flow × 9.81 × efficiency × hours` per day.
pub fn calculate_hydro(
    head: f64,
    flow: f64,
    efficiency: f64,
    hours_per_day: f64,
) -> Result<HydroResult, EstimateError> {
    let head = non_negative("head", head)?;
    let flow = non_negative("flow", flow)?;
    let efficiency = non_negative("efficiency", efficiency)?;
    let hours_per_day = non_negative("hoursPerDay", hours_per_day)?;

    // Evaluated left to right so the product matches the reference figures bit for bit.
    let daily = head * flow * HYDRO_GRAVITY * efficiency * hours_per_day;

    Ok(HydroResult {
        production: ProductionFigures::from_daily(daily),
        efficiency,
    })
}

/// Aggregate scenario balance over fixed per-unit yields.
///
/// Financial savings are taken from the balance, unlike the single-technology
/// calculators which use production.
pub fn calculate_combined(
    producers: &Producers,
    consumers: &ConsumerLoad,
    storage: &StorageSpec,
) -> Result<ScenarioResult, EstimateError> {
    let solar_panels = non_negative("producers.solarPanels", producers.solar_panels)?;
    let wind_turbines = non_negative("producers.windTurbines", producers.wind_turbines)?;
    let hydro_turbines = non_negative("producers.hydroTurbines", producers.hydro_turbines)?;
    let buildings = non_negative("consumers.buildings", consumers.buildings)?;
    let ev_chargers = non_negative("consumers.evChargers", consumers.ev_chargers)?;
    let desalination_plant =
        non_negative("consumers.desalinationPlant", consumers.desalination_plant)?;
    let batteries = non_negative("storage.batteries", storage.batteries)?;
    let hydrogen_storage = non_negative("storage.hydrogenStorage", storage.hydrogen_storage)?;

    let solar_production = solar_panels * MIX_SOLAR_WH_PER_PANEL_DAY * DAYS_PER_YEAR;
    let wind_production = wind_turbines * MIX_WIND_WH_PER_TURBINE_YEAR;
    let hydro_production = hydro_turbines * MIX_HYDRO_WH_PER_UNIT_YEAR;

    let total_production = solar_production + wind_production + hydro_production;
    let total_consumption = buildings * LOAD_PER_BUILDING
        + ev_chargers * LOAD_PER_EV_CHARGER
        + desalination_plant * LOAD_PER_DESALINATION_PLANT;
    let balance = total_production - total_consumption;
    let storage_capacity =
        batteries * STORAGE_PER_BATTERY + hydrogen_storage * STORAGE_PER_HYDROGEN_TANK;

    let autonomy_days = if total_consumption > 0.0 {
        Some(storage_capacity / (total_consumption / DAYS_PER_YEAR))
    } else {
        None
    };

    let solar_details = producers.solar_config.as_ref().map(|c| SolarDetails {
        panels: solar_panels,
        efficiency: configured(c.efficiency, MIX_SOLAR_EFFICIENCY),
        angle: configured(c.angle, MIX_SOLAR_ANGLE),
        production: solar_production,
    });
    let wind_details = producers.wind_config.as_ref().map(|c| WindDetails {
        turbines: wind_turbines,
        power: configured(c.power, MIX_WIND_POWER),
        hub_height: configured(c.hub_height, MIX_WIND_HUB_HEIGHT),
        production: wind_production,
    });
    let hydro_details = producers.hydro_config.as_ref().map(|c| HydroDetails {
        units: hydro_turbines,
        efficiency: configured(c.efficiency, MIX_HYDRO_EFFICIENCY),
        head: configured(c.head, MIX_HYDRO_HEAD),
        flow: configured(c.flow, MIX_HYDRO_FLOW),
        production: hydro_production,
    });

    let unit_cost = |cost: Option<f64>, fallback: f64| -> Result<f64, EstimateError> {
        non_negative("cost", configured(cost, fallback))
    };
    let equipment_costs = EquipmentCosts {
        solar: solar_panels
            * unit_cost(producers.solar_config.as_ref().and_then(|c| c.cost), MIX_SOLAR_UNIT_COST)?,
        wind: wind_turbines
            * unit_cost(producers.wind_config.as_ref().and_then(|c| c.cost), MIX_WIND_UNIT_COST)?,
        hydro: hydro_turbines
            * unit_cost(producers.hydro_config.as_ref().and_then(|c| c.cost), MIX_HYDRO_UNIT_COST)?,
    };

    Ok(ScenarioResult {
        total_production,
        total_consumption,
        balance,
        storage_capacity,
        co2_savings: total_production * CO2_FACTOR,
        financial_savings: balance * TARIFF,
        autonomy_days,
        solar_details,
        wind_details,
        hydro_details,
        equipment_costs,
    })
}

/// Energy demand and economics of a desalination unit.
pub fn calculate_desalination(
    daily_water_production: f64,
    energy_consumption_per_m3: f64,
) -> Result<DesalinationResult, EstimateError> {
    let daily_water_production = non_negative("dailyWaterProduction", daily_water_production)?;
    let energy_consumption_per_m3 =
        non_negative("energyConsumptionPerM3", energy_consumption_per_m3)?;

    let daily_energy_consumption = daily_water_production * energy_consumption_per_m3;
    let water_cost_savings = daily_water_production * DAYS_PER_YEAR * WATER_PRICE_PER_M3;
    let operational_cost = daily_energy_consumption * DAYS_PER_YEAR * TARIFF;

    Ok(DesalinationResult {
        daily_water_production,
        monthly_water_production: daily_water_production * DAYS_PER_MONTH,
        yearly_water_production: daily_water_production * DAYS_PER_YEAR,
        daily_energy_consumption,
        monthly_energy_consumption: daily_energy_consumption * DAYS_PER_MONTH,
        yearly_energy_consumption: daily_energy_consumption * DAYS_PER_YEAR,
        water_cost_savings,
        operational_cost,
        net_savings: water_cost_savings - operational_cost,
        autonomy_percentage: DESALINATION_AUTONOMY_PERCENT,
        system_cost: DESALINATION_SYSTEM_COST,
    })
}
