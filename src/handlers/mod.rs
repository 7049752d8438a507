/// HTTP request handlers
use crate::domain::{Health, LookupRequest, ResultEnvelope};
use crate::errors::ApiError;
use crate::services::WeatherService;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Look up weather for a city. Validation failures are answered before any
/// outbound call; provider-side errors come back inside the envelope.
pub async fn lookup_weather(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ResultEnvelope>, ApiError> {
    let request = LookupRequest::from_query(&params)?;
    info!(city_id = request.city_id, "weather lookup requested");

    let envelope = state.weather_service.lookup(&request).await?;
    Ok(Json(envelope))
}
