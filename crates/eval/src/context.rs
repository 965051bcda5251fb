//! Context assembly from a raw observation.
//!
//! `build_context` is a pure function: one observation in, the fixed
//! 11-key fact mapping out. Derivations that need data the provider does
//! not carry (soil moisture, crop calendar) pin conservative constants
//! so rules over those facts stay meaningful once a real source exists.

use std::collections::BTreeMap;

use agro_core::{keys, Scalar};
use serde::Serialize;

use crate::observation::{ForecastSlice, Observation};

/// The flat fact mapping rule conditions are evaluated against. Built
/// once per request, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context(BTreeMap<String, Scalar>);

impl Context {
    pub fn new() -> Self {
        Context(BTreeMap::new())
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Scalar>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Absent keys stay absent; the evaluator treats them as
    /// never-matching rather than erroring.
    pub fn get(&self, key: &str) -> Option<Scalar> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Scalar)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Derive the evaluation context from an observation.
pub fn build_context(observation: &Observation) -> Context {
    let current = &observation.current;
    let slices = observation
        .forecast
        .as_ref()
        .and_then(|forecast| forecast.list.as_deref());

    // With a forecast, sum the 3-hour amounts over the next ~24h / ~48h.
    // Without one, fall back to whatever the current reading carries.
    let rainfall_mm = match slices {
        Some(list) => sum_forecast_rain(list, 8),
        None => current.rain.map(|r| r.amount()).unwrap_or(0.0),
    };
    let rainfall_48h_mm = match slices {
        Some(list) => sum_forecast_rain(list, 16),
        None => 0.0,
    };

    let thunderstorm = current
        .weather
        .first()
        .map(|w| (200..300).contains(&w.id))
        .unwrap_or(false);

    let mut context = Context::new();
    context.insert(keys::TEMPERATURE_C, current.main.temp);
    context.insert(keys::HUMIDITY_PCT, current.main.humidity);
    context.insert(keys::WIND_KMPH, current.wind.speed * 3.6);
    context.insert(keys::RAINFALL_MM, rainfall_mm);
    context.insert(keys::RAINFALL_48H_MM, rainfall_48h_mm);
    context.insert(keys::VISIBILITY_KM, current.visibility / 1000.0);
    context.insert(
        keys::PROB_THUNDERSTORM,
        if thunderstorm { 1.0 } else { 0.0 },
    );
    context.insert(keys::SOIL_MOISTURE_PCT, 50.0);
    context.insert(keys::CONSECUTIVE_RAIN_DAYS, 0.0);
    context.insert(
        keys::RAIN_EXPECTED_WITHIN_HOURS,
        if rainfall_mm > 0.0 { 0.0 } else { 24.0 },
    );
    context.insert(keys::DAYS_TO_HARVEST, 30.0);
    context
}

/// Sum `rain["3h"]` over the first `horizon` slices. Slices without a
/// rain object contribute 0; a list shorter than the horizon just sums
/// what is there.
fn sum_forecast_rain(slices: &[ForecastSlice], horizon: usize) -> f64 {
    slices
        .iter()
        .take(horizon)
        .map(|slice| {
            slice
                .rain
                .and_then(|r| r.three_hours)
                .unwrap_or(0.0)
        })
        .sum()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
