use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::services::estimator;

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_static_dir() -> String { "static".to_string() }
fn default_insolation_hours() -> f64 { estimator::SOLAR_INSOLATION_HOURS }
fn default_wind_full_load_hours() -> f64 { estimator::WIND_FULL_LOAD_HOURS }
fn default_hydro_efficiency() -> f64 { estimator::HYDRO_EFFICIENCY }
fn default_hydro_hours_per_day() -> f64 { estimator::HYDRO_HOURS_PER_DAY }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub estimator: EstimatorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served for any path outside `/api` and `/scalar`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

/// Operating assumptions fed into the per-technology formulas.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    #[serde(default = "default_insolation_hours")]
    pub insolation_hours: f64,
    #[serde(default = "default_wind_full_load_hours")]
    pub wind_full_load_hours: f64,
    #[serde(default = "default_hydro_efficiency")]
    pub hydro_efficiency: f64,
    #[serde(default = "default_hydro_hours_per_day")]
    pub hydro_hours_per_day: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            insolation_hours: default_insolation_hours(),
            wind_full_load_hours: default_wind_full_load_hours(),
            hydro_efficiency: default_hydro_efficiency(),
            hydro_hours_per_day: default_hydro_hours_per_day(),
        }
    }
}

impl Config {
    /// Reads a JSON config file. A missing file yields the defaults; a file that
    /// exists but does not parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let c = Config::from_json("{}").unwrap();
        assert_eq!(c.server.port, 8080);
        assert_eq!(c.server.static_dir, "static");
        assert!(!c.logging.json);
        assert_eq!(c.estimator, EstimatorConfig::default());
        assert_eq!(c.estimator.insolation_hours, 5.5);
        assert_eq!(c.estimator.hydro_hours_per_day, 24.0);
    }

    #[test]
    fn test_partial_sections() {
        let c = Config::from_json(
            r#"{ "server": { "port": 9000 }, "estimator": { "insolation_hours": 4.2 } }"#,
        )
        .unwrap();
        assert_eq!(c.server.port, 9000);
        assert_eq!(c.server.host, "0.0.0.0");
        assert_eq!(c.estimator.insolation_hours, 4.2);
        assert_eq!(c.estimator.wind_full_load_hours, 8.0);
        assert_eq!(c.server.socket_addr().unwrap().port(), 9000);
    }

    #[test]
    fn test_static_dir_lives_under_server() {
        let c = Config::from_json(r#"{ "server": { "static_dir": "public" } }"#).unwrap();
        assert_eq!(c.server.static_dir, "public");
        assert_eq!(c.server.port, 8080);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Config::from_json("{ server: ").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let c = Config::load("definitely/not/here/config.json").unwrap();
        assert_eq!(c.server.port, 8080);
    }
}
