//! Weather feed types and normalization
//!
//! The backend's location reports may omit the nested `main` and `weather`
//! objects entirely. Reports are flattened into entries whose optional fields
//! are safe to render without further shape checks.

use serde::Deserialize;

/// Raw location report as returned by the backend weather endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    /// Location name, e.g. a city.
    #[serde(default)]
    pub name: String,
    /// Temperature and humidity readings. May be absent.
    #[serde(default)]
    pub main: Option<MainReadings>,
    /// Condition summaries. May be absent or empty.
    #[serde(default)]
    pub weather: Vec<ConditionSummary>,
}

/// The `main` object of a location report.
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// One element of a report's `weather` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionSummary {
    #[serde(default)]
    pub description: Option<String>,
}

/// A normalized weather entry for one location.
///
/// Absent readings stay `None` rather than defaulting to zero, so the
/// renderer can distinguish "no reading" from a real measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherEntry {
    pub name: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub description: Option<String>,
}

impl From<WeatherReport> for WeatherEntry {
    fn from(report: WeatherReport) -> Self {
        let WeatherReport {
            name,
            main,
            weather,
        } = report;
        let (temperature, humidity) = match main {
            Some(readings) => (readings.temp, readings.humidity),
            None => (None, None),
        };
        // Only the first condition summary is displayed
        let description = weather.into_iter().next().and_then(|c| c.description);
        Self {
            name,
            temperature,
            humidity,
            description,
        }
    }
}
