/// Business logic services layer
use crate::clients::{ProviderReply, WeatherClient};
use crate::domain::{LookupRequest, NormalizedWeather, ProviderWeatherResponse, ResultEnvelope};
use crate::errors::ApiResult;
use reqwest::StatusCode;
use tracing::debug;

/// Weather lookup service
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch weather for a validated request and shape the reply into the
    /// result envelope.
    pub async fn lookup(&self, request: &LookupRequest) -> ApiResult<ResultEnvelope> {
        let reply = self.client.fetch_weather(request).await?;
        debug!(
            city_id = request.city_id,
            status = reply.status.as_u16(),
            "provider reply received"
        );
        transform(reply)
    }
}

/// Project a raw provider reply into the result envelope.
///
/// A non-200 provider status is passed through inside the envelope, not
/// treated as a local failure. A 200 with an unparseable body is terminal
/// for the request.
fn transform(reply: ProviderReply) -> ApiResult<ResultEnvelope> {
    if reply.status != StatusCode::OK {
        let reason = reply.status.canonical_reason().unwrap_or("Unknown");
        return Ok(ResultEnvelope::error(reply.status.as_u16(), reason));
    }

    let raw: ProviderWeatherResponse = serde_json::from_str(&reply.body)?;
    Ok(ResultEnvelope::ok(NormalizedWeather::from(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EnvelopeBody;
    use crate::errors::ApiError;

    fn sample_body() -> String {
        serde_json::json!({
            "weather": [
                {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"},
                {"id": 701, "main": "Mist", "description": "mist", "icon": "50d"}
            ],
            "main": {"temp": 8.2, "pressure": 998.0, "humidity": 93.0},
            "wind": {"speed": 5.1, "deg": 22.5},
            "sys": {"sunrise": 1717200000i64, "sunset": 1717255000i64}
        })
        .to_string()
    }

    #[test]
    fn ok_reply_is_normalized() {
        let envelope = transform(ProviderReply {
            status: StatusCode::OK,
            body: sample_body(),
        })
        .unwrap();

        assert_eq!(envelope.r#type, "OK");
        assert_eq!(envelope.status, 200);
        let weather = match envelope.response {
            EnvelopeBody::Weather(w) => w,
            EnvelopeBody::Message(m) => panic!("expected weather body, got {m}"),
        };
        assert_eq!(weather.weather_list.len(), 2);
        assert_eq!(weather.weather_list[0].name, "Rain");
        assert_eq!(weather.weather_list[1].icon, "50d");
        assert_eq!(weather.temperature, 8.2);
        assert_eq!(weather.humidity, 93.0);
        assert_eq!(weather.pressure, 998.0);
        assert_eq!(weather.wind_speed, 5.1);
        assert_eq!(weather.wind_direction, "NNE");
        assert_eq!(weather.sunrise, 1717200000);
        assert_eq!(weather.sunset, 1717255000);
    }

    #[test]
    fn upstream_error_passes_through_as_envelope() {
        let envelope = transform(ProviderReply {
            status: StatusCode::NOT_FOUND,
            body: r#"{"cod":"404","message":"city not found"}"#.to_string(),
        })
        .unwrap();

        assert_eq!(envelope.r#type, "ERROR");
        assert_eq!(envelope.status, 404);
        match envelope.response {
            EnvelopeBody::Message(m) => assert_eq!(m, "Not Found"),
            EnvelopeBody::Weather(_) => panic!("expected message body"),
        }
    }

    #[test]
    fn unparseable_ok_body_is_terminal() {
        let err = transform(ProviderReply {
            status: StatusCode::OK,
            body: "not json at all".to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, ApiError::MalformedProviderResponse(_)));
    }

    #[test]
    fn missing_blocks_are_malformed() {
        let err = transform(ProviderReply {
            status: StatusCode::OK,
            body: r#"{"weather": []}"#.to_string(),
        })
        .unwrap_err();

        assert!(matches!(err, ApiError::MalformedProviderResponse(_)));
    }
}
