//! City weather lookup service.
//!
//! One endpoint: validate the query, make a single GET to the weather
//! provider, reshape the payload, answer with the result envelope.

pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;

use crate::clients::WeatherClient;
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::services::WeatherService;
use axum::Router;
use std::sync::Arc;

/// Wire the provider client and service into a ready-to-serve router.
pub fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let client = WeatherClient::new(
        config.provider_base_url.clone(),
        config.provider_api_key.clone(),
    )?;
    let weather_service = Arc::new(WeatherService::new(client));

    let state = AppState { weather_service };
    Ok(routes::build_router(state))
}
