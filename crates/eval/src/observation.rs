//! Raw weather observation types.
//!
//! These mirror the weather provider's JSON shape (current conditions
//! plus an optional 3-hourly forecast) and are read-only to the engine.
//! Only temperature, humidity and wind speed are required; everything
//! else degrades gracefully when absent, per the upstream contract.

use serde::Deserialize;

/// One evaluation input: current conditions plus an optional forecast.
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: Option<Forecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub main: MainReadings,
    pub wind: Wind,
    /// Meters. The provider caps this at 10 km; when the field is absent
    /// we assume the cap so low-visibility rules never fire on missing
    /// data.
    #[serde(default = "default_visibility_m")]
    pub visibility: f64,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    /// Resolved place name, echoed back by the surrounding service.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sys: Option<Sys>,
}

fn default_visibility_m() -> f64 {
    10_000.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    /// Degrees Celsius.
    pub temp: f64,
    /// Relative humidity, 0-100.
    pub humidity: f64,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    /// Meters per second.
    pub speed: f64,
}

/// The provider's weather classification. Ids 200-299 are thunderstorms.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub id: i64,
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Precipitation amounts in mm. The provider sends whichever window it
/// has; both fields are often absent entirely.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Precipitation {
    #[serde(default, rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(default, rename = "3h")]
    pub three_hours: Option<f64>,
}

impl Precipitation {
    /// First window present, defaulting to 0.
    pub fn amount(&self) -> f64 {
        self.one_hour.or(self.three_hours).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

/// 3-hourly forecast. `list` stays optional: a forecast object without a
/// slice list behaves exactly like no forecast at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub list: Option<Vec<ForecastSlice>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlice {
    /// Epoch seconds of the slice.
    #[serde(default)]
    pub dt: Option<i64>,
    #[serde(default)]
    pub main: Option<SliceReadings>,
    #[serde(default)]
    pub rain: Option<Precipitation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SliceReadings {
    #[serde(default)]
    pub temp: Option<f64>,
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
