//! Seed reference data: equipment, desalination technologies and regions.
//! Read-only once built.

use crate::error::EstimateError;
use crate::models::equipment::{
    DesalinationTechnology, EquipmentSpec, HydroEquipment, SiteParameters, SolarPanel,
    WindTurbine,
};

#[derive(Debug, Clone)]
pub struct Catalog {
    solar_panels: Vec<SolarPanel>,
    wind_turbines: Vec<WindTurbine>,
    hydro_equipment: Vec<HydroEquipment>,
    desalination: Vec<DesalinationTechnology>,
    regions: Vec<SiteParameters>,
}

/// Returns the trimmed selection, or `MissingInput` naming the field.
pub fn require_selection<'a>(field: &str, value: &'a str) -> Result<&'a str, EstimateError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EstimateError::MissingInput(field.to_string()));
    }
    Ok(value)
}

fn lookup<'a, T>(
    items: &'a [T],
    field: &str,
    kind: &str,
    id: &str,
    key: impl Fn(&T) -> &str,
) -> Result<&'a T, EstimateError> {
    let id = require_selection(field, id)?;
    items
        .iter()
        .find(|item| key(item) == id)
        .ok_or_else(|| EstimateError::CalculationFailure(format!("unknown {kind} '{id}'")))
}

impl Catalog {
    pub fn seed() -> Self {
        Self {
            solar_panels: vec![
                panel("1", "Monocrystalline 400W", "monocrystalline", 22.1, 400.0, 250.0, false),
                panel("2", "Polycrystalline 350W", "polycrystalline", 19.8, 350.0, 200.0, false),
                panel("3", "Thin Film 300W", "thin-film", 16.5, 300.0, 150.0, false),
                panel("4", "Custom Panel A", "custom", 24.5, 450.0, 300.0, true),
            ],
            wind_turbines: vec![
                turbine("1", "Vestas V90-2.0MW", 2000.0, 80.0, 90.0, 1_200_000.0, false),
                turbine("2", "Siemens SWT-2.3-108", 2300.0, 80.0, 108.0, 1_400_000.0, false),
                turbine("3", "GE 1.5MW", 1500.0, 65.0, 77.0, 900_000.0, false),
                turbine("4", "Custom Turbine X", 2500.0, 90.0, 120.0, 1_600_000.0, true),
            ],
            hydro_equipment: vec![
                hydro("1", "Pelton Wheel 500kW", "pelton", 0.92, 2.5, 300.0, 400_000.0, false),
                hydro("2", "Francis Turbine 1MW", "francis", 0.90, 8.0, 150.0, 600_000.0, false),
                hydro("3", "Kaplan Turbine 2MW", "kaplan", 0.88, 25.0, 30.0, 800_000.0, false),
                hydro("4", "Custom Micro-Hydro", "custom", 0.85, 1.2, 50.0, 150_000.0, true),
            ],
            desalination: vec![
                desal("ro", "Reverse Osmosis", 0.85, 3.5),
                desal("thermal", "Thermal Distillation", 0.75, 5.2),
                desal("hybrid", "Hybrid RO-Thermal", 0.90, 4.1),
            ],
            regions: vec![
                region("1", "Αθήνα", "Athens", [37.9838, 23.7275], 1650.0, 8.5, 170.0),
                region("2", "Θεσσαλονίκη", "Thessaloniki", [40.6401, 22.9444], 1580.0, 9.2, 40.0),
                region("3", "Κρήτη", "Crete", [35.2401, 24.8093], 1750.0, 11.8, 250.0),
                region("4", "Πάτρα", "Patras", [38.2466, 21.7346], 1620.0, 7.9, 50.0),
                region("5", "Ρόδος", "Rhodes", [36.4341, 28.2176], 1820.0, 13.2, 120.0),
                region("6", "Μύκονος", "Mykonos", [37.4467, 25.3289], 1780.0, 15.6, 80.0),
                region("7", "Σαντορίνη", "Santorini", [36.3932, 25.4615], 1850.0, 14.3, 200.0),
                region("8", "Κέρκυρα", "Corfu", [39.6243, 19.9217], 1520.0, 8.1, 90.0),
            ],
        }
    }

    pub fn solar_panels(&self) -> &[SolarPanel] {
        &self.solar_panels
    }

    pub fn wind_turbines(&self) -> &[WindTurbine] {
        &self.wind_turbines
    }

    pub fn hydro_equipment(&self) -> &[HydroEquipment] {
        &self.hydro_equipment
    }

    pub fn desalination_technologies(&self) -> &[DesalinationTechnology] {
        &self.desalination
    }

    pub fn regions(&self) -> &[SiteParameters] {
        &self.regions
    }

    /// Every solar, wind and hydro entry in the uniform `EquipmentSpec` shape.
    pub fn equipment_specs(&self) -> Vec<EquipmentSpec> {
        self.solar_panels
            .iter()
            .map(EquipmentSpec::from)
            .chain(self.wind_turbines.iter().map(EquipmentSpec::from))
            .chain(self.hydro_equipment.iter().map(EquipmentSpec::from))
            .collect()
    }

    pub fn solar_panel(&self, id: &str) -> Result<&SolarPanel, EstimateError> {
        lookup(&self.solar_panels, "panelId", "solar panel", id, |p| p.id.as_str())
    }

    pub fn wind_turbine(&self, id: &str) -> Result<&WindTurbine, EstimateError> {
        lookup(&self.wind_turbines, "turbineId", "wind turbine", id, |t| t.id.as_str())
    }

    pub fn hydro(&self, id: &str) -> Result<&HydroEquipment, EstimateError> {
        lookup(&self.hydro_equipment, "equipmentId", "hydro equipment", id, |h| h.id.as_str())
    }

    pub fn desalination_technology(
        &self,
        id: &str,
    ) -> Result<&DesalinationTechnology, EstimateError> {
        lookup(&self.desalination, "technologyId", "desalination technology", id, |d| d.id.as_str())
    }

    pub fn region(&self, id: &str) -> Result<&SiteParameters, EstimateError> {
        lookup(&self.regions, "location", "region", id, |r| r.id.as_str())
    }
}

fn panel(
    id: &str,
    name: &str,
    panel_type: &str,
    efficiency: f64,
    wattage: f64,
    cost: f64,
    is_custom: bool,
) -> SolarPanel {
    SolarPanel {
        id: id.to_string(),
        name: name.to_string(),
        panel_type: panel_type.to_string(),
        efficiency,
        wattage,
        cost,
        is_custom,
    }
}

fn turbine(
    id: &str,
    name: &str,
    power: f64,
    hub_height: f64,
    rotor_diameter: f64,
    cost: f64,
    is_custom: bool,
) -> WindTurbine {
    WindTurbine {
        id: id.to_string(),
        name: name.to_string(),
        power,
        hub_height,
        rotor_diameter,
        cost,
        is_custom,
    }
}

#[allow(clippy::too_many_arguments)]
fn hydro(
    id: &str,
    name: &str,
    turbine_type: &str,
    efficiency: f64,
    max_flow: f64,
    max_head: f64,
    cost: f64,
    is_custom: bool,
) -> HydroEquipment {
    HydroEquipment {
        id: id.to_string(),
        name: name.to_string(),
        turbine_type: turbine_type.to_string(),
        efficiency,
        max_flow,
        max_head,
        cost,
        is_custom,
    }
}

fn desal(id: &str, name: &str, efficiency: f64, energy_consumption: f64) -> DesalinationTechnology {
    DesalinationTechnology {
        id: id.to_string(),
        name: name.to_string(),
        efficiency,
        energy_consumption,
    }
}

fn region(
    id: &str,
    name: &str,
    name_en: &str,
    coordinates: [f64; 2],
    solar_irradiance: f64,
    wind_speed: f64,
    elevation: f64,
) -> SiteParameters {
    SiteParameters {
        id: id.to_string(),
        name: name.to_string(),
        name_en: name_en.to_string(),
        coordinates,
        solar_irradiance,
        wind_speed,
        elevation,
    }
}
