pub mod calculator_controller;
pub mod catalog_controller;
pub mod dashboard_controller;
pub mod scenario_controller;
pub mod system_controller;
