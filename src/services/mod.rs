pub mod calculator_service;
pub mod catalog;
pub mod estimator;
