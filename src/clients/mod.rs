/// External API clients module
use crate::domain::{LookupRequest, Units};
use crate::errors::ApiResult;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("city-weather-service/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Raw reply from the provider: the transformer decides what the status and
/// body mean.
#[derive(Debug)]
pub struct ProviderReply {
    pub status: StatusCode,
    pub body: String,
}

/// Weather provider client
pub struct WeatherClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(base_url: String, api_key: String) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url,
            api_key,
        })
    }

    /// Build the provider URL for a validated request. The values are an
    /// integer, the configured key, and an enumerated word, so no extra
    /// percent-encoding is applied.
    fn request_url(&self, request: &LookupRequest) -> String {
        let units = request.units.unwrap_or(Units::Metric);
        format!(
            "{}/data/2.5/weather?id={}&APPID={}&units={}",
            self.base_url,
            request.city_id,
            self.api_key,
            units.as_str()
        )
    }

    /// Issue the single outbound GET for this request. No timeout beyond
    /// the client default and no retry; a transport error is terminal.
    pub async fn fetch_weather(&self, request: &LookupRequest) -> ApiResult<ProviderReply> {
        let resp = self
            .http_client
            .get_client()
            .get(self.request_url(request))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        Ok(ProviderReply { status, body })
    }
}
