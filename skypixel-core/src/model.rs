use serde::{Deserialize, Serialize};

/// Current conditions for one location, as extracted from a provider response.
///
/// Built per lookup, printed, and discarded. Nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub temperature_c: f64,
    pub condition: String,
    pub wind_kph: f64,
}
