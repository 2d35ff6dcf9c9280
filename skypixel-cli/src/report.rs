//! Output formatting for the `weather` binary.

use skypixel_core::{WeatherError, WeatherReport};

/// The glyph-prefixed report block printed on success.
pub fn format_report(report: &WeatherReport) -> String {
    format!(
        "🌍 {}, {}\n\
         🌡️ Temperature: {}°C\n\
         🌤️ Weather: {}\n\
         💨 Wind Speed: {} kph",
        report.location, report.country, report.temperature_c, report.condition, report.wind_kph
    )
}

/// One user-facing line per failure. The three message shapes match the
/// original tool; everything not status-driven lands in the catch-all.
pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<WeatherError>() {
        Some(WeatherError::InvalidCity) => "❌ Invalid city or bad request.".to_string(),
        Some(http @ WeatherError::Http { .. }) => format!("❌ HTTP Error: {http}"),
        Some(other) => format!("❌ An error occurred: {other}"),
        None => format!("❌ An error occurred: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn report() -> WeatherReport {
        WeatherReport {
            location: "Lisbon".to_string(),
            country: "Portugal".to_string(),
            temperature_c: 21.5,
            condition: "Sunny".to_string(),
            wind_kph: 14.4,
        }
    }

    #[test]
    fn report_prints_the_expected_glyph_lines() {
        let lines: Vec<_> = format_report(&report()).lines().map(str::to_owned).collect();

        assert_eq!(
            lines,
            vec![
                "🌍 Lisbon, Portugal",
                "🌡️ Temperature: 21.5°C",
                "🌤️ Weather: Sunny",
                "💨 Wind Speed: 14.4 kph",
            ]
        );
    }

    #[test]
    fn invalid_city_uses_the_fixed_message() {
        let err = anyhow::Error::new(WeatherError::InvalidCity);
        assert_eq!(format_error(&err), "❌ Invalid city or bad request.");
    }

    #[test]
    fn http_errors_include_status_context() {
        let err = anyhow::Error::new(WeatherError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "upstream exploded".to_string(),
        });

        let msg = format_error(&err);
        assert!(msg.starts_with("❌ HTTP Error:"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn everything_else_falls_through_to_the_catch_all() {
        let decode_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = anyhow::Error::new(WeatherError::Decode(decode_err));

        assert!(format_error(&err).starts_with("❌ An error occurred:"));

        let plain = anyhow::anyhow!("config file unreadable");
        assert_eq!(format_error(&plain), "❌ An error occurred: config file unreadable");
    }
}
