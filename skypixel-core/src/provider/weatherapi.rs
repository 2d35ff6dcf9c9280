use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{error::WeatherError, model::WeatherReport};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1/current.json";

/// Per-request deadline. The upstream default would wait indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different endpoint. Used by tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn send_once(&self, city: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.http
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
    }

    /// Single GET with exactly one retry on transport failure. HTTP error
    /// statuses are never retried.
    async fn send(&self, city: &str) -> Result<reqwest::Response, WeatherError> {
        match self.send_once(city).await {
            Ok(res) => Ok(res),
            Err(err) if err.is_connect() || err.is_timeout() => {
                debug!(%err, "transport failure, retrying once");
                self.send_once(city).await.map_err(WeatherError::Network)
            }
            Err(err) => Err(WeatherError::Network(err)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherReport {
    fn from(parsed: WaResponse) -> Self {
        WeatherReport {
            location: parsed.location.name,
            country: parsed.location.country,
            temperature_c: parsed.current.temp_c,
            condition: parsed.current.condition.text,
            wind_kph: parsed.current.wind_kph,
        }
    }
}

/// Map a non-success status to its error. 400 is almost always an unknown
/// city with this API, so it gets the dedicated variant.
fn classify_status(status: StatusCode, body: &str) -> Option<WeatherError> {
    if status.is_success() {
        return None;
    }

    Some(match status {
        StatusCode::BAD_REQUEST => WeatherError::InvalidCity,
        _ => WeatherError::Http { status, detail: truncate_body(body) },
    })
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        debug!(city, url = %self.base_url, "requesting current weather");

        let res = self.send(city).await?;

        let status = res.status();
        let body = res.text().await.map_err(WeatherError::Network)?;

        if let Some(err) = classify_status(status, &body) {
            return Err(err);
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Largest char boundary at or below the limit, so multibyte bodies
    // never split mid-character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...", &body[..end])
}
