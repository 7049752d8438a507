/// Domain models for the application
use crate::errors::{ApiError, ApiResult};
use crate::utils::wind_direction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unit system accepted by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

/// A validated lookup request.
///
/// `units` stays `None` when the caller omitted it; the `metric` default is
/// applied when the outbound query is built, not here.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub city_id: i64,
    pub units: Option<Units>,
}

impl LookupRequest {
    /// Validate the raw query parameters into a `LookupRequest`.
    ///
    /// `cityId` must be a base-10 integer and `units`, when given, must be
    /// exactly `metric` or `imperial`. Rejection happens before any network
    /// call is made.
    pub fn from_query(params: &HashMap<String, String>) -> ApiResult<Self> {
        let city_id = params
            .get("cityId")
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or(ApiError::InvalidCityId)?;

        let units = match params.get("units").map(String::as_str) {
            None | Some("") => None,
            Some("metric") => Some(Units::Metric),
            Some("imperial") => Some(Units::Imperial),
            Some(_) => return Err(ApiError::InvalidUnits),
        };

        Ok(Self { city_id, units })
    }
}

/// Raw payload returned by the weather provider. Held only for the duration
/// of one request.
#[derive(Debug, Deserialize)]
pub struct ProviderWeatherResponse {
    pub weather: Vec<ProviderCondition>,
    pub main: ProviderMain,
    pub wind: ProviderWind,
    pub sys: ProviderSys,
}

#[derive(Debug, Deserialize)]
pub struct ProviderCondition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub struct ProviderMain {
    pub temp: f64,
    pub pressure: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct ProviderWind {
    pub speed: f64,
    pub deg: f64,
}

#[derive(Debug, Deserialize)]
pub struct ProviderSys {
    pub sunrise: i64,
    pub sunset: i64,
}

/// One weather condition descriptor in the normalized output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConditionInfo {
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// The normalized weather entity returned to the caller. Constructed once
/// from the provider payload and serialized directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedWeather {
    pub weather_list: Vec<ConditionInfo>,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: &'static str,
    pub sunrise: i64,
    pub sunset: i64,
}

impl From<ProviderWeatherResponse> for NormalizedWeather {
    fn from(raw: ProviderWeatherResponse) -> Self {
        let weather_list = raw
            .weather
            .into_iter()
            .map(|w| ConditionInfo {
                name: w.main,
                description: w.description,
                icon: w.icon,
            })
            .collect();

        Self {
            weather_list,
            temperature: raw.main.temp,
            humidity: raw.main.humidity,
            pressure: raw.main.pressure,
            wind_speed: raw.wind.speed,
            wind_direction: wind_direction(raw.wind.deg),
            sunrise: raw.sys.sunrise,
            sunset: raw.sys.sunset,
        }
    }
}

/// Outer `{Type, Status, Response}` wrapper returned for both success and
/// provider-side failure. Exactly one body variant per response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultEnvelope {
    pub r#type: &'static str,
    pub status: u16,
    pub response: EnvelopeBody,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum EnvelopeBody {
    Weather(NormalizedWeather),
    Message(String),
}

impl ResultEnvelope {
    pub fn ok(weather: NormalizedWeather) -> Self {
        Self {
            r#type: "OK",
            status: 200,
            response: EnvelopeBody::Weather(weather),
        }
    }

    pub fn error(status: u16, reason: &str) -> Self {
        Self {
            r#type: "ERROR",
            status,
            response: EnvelopeBody::Message(reason.to_string()),
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
