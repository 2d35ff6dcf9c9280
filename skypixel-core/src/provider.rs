use crate::{Config, WeatherReport, error::WeatherError, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city. One attempt, one bounded retry
    /// on transport failure, no caching.
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

/// Construct the provider from loaded config plus an optional `--key` override.
pub fn provider_from_config(
    config: &Config,
    key_override: Option<String>,
) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = config.resolve_api_key(key_override)?;
    Ok(Box::new(WeatherApiProvider::new(api_key)))
}
