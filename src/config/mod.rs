/// Application configuration module
use anyhow::Context;
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub provider_base_url: String,
    pub provider_api_key: String,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // The provider credential is a secret and must be injected, never
        // shipped in the binary.
        let provider_api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY is required")?;

        let provider_base_url = env::var("WEATHER_API_URL")
            .unwrap_or_else(|_| "http://api.openweathermap.org".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            provider_base_url,
            provider_api_key,
            bind_addr,
        })
    }
}
