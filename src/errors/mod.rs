/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failures terminal for the current request. Client-input errors map to
/// 400 with a fixed message; everything else maps to a generic 500 with the
/// detail logged server-side only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid cityId. Make sure you are sending it to the queryString and that it's a valid integer")]
    InvalidCityId,

    #[error("Invalid unit type. You may only use imperial or metric")]
    InvalidUnits,

    #[error("provider request failed: {0}")]
    ProviderUnavailable(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    MalformedProviderResponse(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidCityId | ApiError::InvalidUnits => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::ProviderUnavailable(_) | ApiError::MalformedProviderResponse(_) => {
                error!("Error fetching weather data: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while fetching weather data",
                )
                    .into_response()
            }
        }
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
