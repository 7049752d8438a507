/// Application routes configuration
use crate::handlers::{health, lookup_weather, AppState};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Weather lookup (the original endpoint accepts both verbs)
        .route("/weather", get(lookup_weather).post(lookup_weather))
        .with_state(state)
}
