//! Fixed context-key vocabulary.
//!
//! These are the only fact names the context builder ever emits, and the
//! names rule conditions are expected to reference. A condition referencing
//! anything else simply never matches; `validate` flags it so the rule
//! author finds out before deploying the table.

/// Current temperature in degrees Celsius.
pub const TEMPERATURE_C: &str = "temperature_c";
/// Current relative humidity, 0-100.
pub const HUMIDITY_PCT: &str = "humidity_pct";
/// Current wind speed in km/h (provider reports m/s).
pub const WIND_KMPH: &str = "wind_kmph";
/// Expected rainfall over the next ~24h in mm.
pub const RAINFALL_MM: &str = "rainfall_mm";
/// Expected rainfall over the next ~48h in mm.
pub const RAINFALL_48H_MM: &str = "rainfall_48h_mm";
/// Current visibility in km.
pub const VISIBILITY_KM: &str = "visibility_km";
/// Thunderstorm indicator, 1.0 or 0.0.
pub const PROB_THUNDERSTORM: &str = "prob_thunderstorm";
/// Soil moisture percentage. No live sensor source; fixed at 50.
pub const SOIL_MOISTURE_PCT: &str = "soil_moisture_pct";
/// Consecutive rain days. Not derivable from a snapshot; fixed at 0.
pub const CONSECUTIVE_RAIN_DAYS: &str = "consecutive_rain_days";
/// Hours until rain is expected. Coarse: 0 when already raining, else 24.
pub const RAIN_EXPECTED_WITHIN_HOURS: &str = "rain_expected_within_hours";
/// Days until harvest. No crop-calendar input; fixed at 30.
pub const DAYS_TO_HARVEST: &str = "days_to_harvest";

/// Every key the context builder produces, in a stable order.
pub const ALL: [&str; 11] = [
    TEMPERATURE_C,
    HUMIDITY_PCT,
    WIND_KMPH,
    RAINFALL_MM,
    RAINFALL_48H_MM,
    VISIBILITY_KM,
    PROB_THUNDERSTORM,
    SOIL_MOISTURE_PCT,
    CONSECUTIVE_RAIN_DAYS,
    RAIN_EXPECTED_WITHIN_HOURS,
    DAYS_TO_HARVEST,
];

/// True if `name` belongs to the fixed vocabulary.
pub fn is_known(name: &str) -> bool {
    ALL.contains(&name)
}
