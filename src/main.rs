mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod error;
mod telemetry;

use std::time::Duration;

use anyhow::Context;
use axum::{Router, routing::get, response::Html};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::routes::api_routes::api_routes;
use crate::services::catalog::Catalog;
use crate::shared_state::AppState;

const CONFIG_ENV: &str = "RENEWABLE_CALC_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration: CLI argument, then env var, then ./config.json
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .unwrap_or_else(|| "config.json".to_string());
    let config = Config::load(&config_path)?;

    // 2. Logging
    telemetry::init_tracing(config.logging.json);
    if !std::path::Path::new(&config_path).exists() {
        tracing::warn!(path = %config_path, "config file not found, using defaults");
    }
    tracing::info!(
        path = %config_path,
        insolation_hours = config.estimator.insolation_hours,
        wind_full_load_hours = config.estimator.wind_full_load_hours,
        hydro_efficiency = config.estimator.hydro_efficiency,
        "configuration loaded"
    );

    // 3. Shared state
    let catalog = Catalog::seed();
    tracing::info!(
        solar = catalog.solar_panels().len(),
        wind = catalog.wind_turbines().len(),
        hydro = catalog.hydro_equipment().len(),
        regions = catalog.regions().len(),
        "equipment catalog ready"
    );
    let state = AppState::new(catalog, config.estimator);

    // 4. HTTP server
    let app = Router::new()
        .nest("/api", api_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    tracing::info!("API Server listening on http://{}", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);

    let handle = axum_server::Handle::new();
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        telemetry::shutdown_signal().await;
        shutdown_handle.graceful_shutdown(Some(Duration::from_secs(10)));
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .context("HTTP server error")?;

    tracing::info!("server stopped");
    Ok(())
}
