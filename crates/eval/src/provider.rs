//! Observation provider trait and implementations.
//!
//! An `ObservationProvider` asynchronously supplies the raw weather
//! observation for a place. Fetching is the surrounding service's job;
//! the engine only defines the seam so callers can plug in an HTTP
//! client, a cache, or a fixture.

use async_trait::async_trait;
use std::fmt;

use crate::observation::Observation;

/// Errors that can occur while a provider fetches an observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The place could not be resolved by the upstream source.
    UnknownPlace(String),
    /// A provider-specific error occurred.
    Provider(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::UnknownPlace(place) => write!(f, "unknown place: {}", place),
            ProviderError::Provider(msg) => write!(f, "observation provider error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Asynchronous source of weather observations.
#[async_trait]
pub trait ObservationProvider: Send + Sync {
    /// Fetch the current observation (and forecast, if available) for a
    /// place, typically a city name.
    async fn observe(&self, place: &str) -> Result<Observation, ProviderError>;
}

/// A provider that returns one fixed observation for every place.
/// Useful for tests and offline evaluation.
pub struct StaticObservationProvider {
    observation: Observation,
}

impl StaticObservationProvider {
    pub fn new(observation: Observation) -> Self {
        Self { observation }
    }
}

#[async_trait]
impl ObservationProvider for StaticObservationProvider {
    async fn observe(&self, _place: &str) -> Result<Observation, ProviderError> {
        Ok(self.observation.clone())
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_returns_fixture() {
        let observation: Observation = serde_json::from_value(serde_json::json!({
            "current": {
                "main": { "temp": 19.0, "humidity": 48 },
                "wind": { "speed": 1.5 }
            }
        }))
        .unwrap();

        let provider = StaticObservationProvider::new(observation);
        let fetched = provider.observe("anywhere").await.unwrap();
        assert_eq!(fetched.current.main.temp, 19.0);
    }

    #[test]
    fn error_display() {
        let err = ProviderError::Provider("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "observation provider error: connection refused"
        );
        let err = ProviderError::UnknownPlace("Atlantis".to_string());
        assert_eq!(err.to_string(), "unknown place: Atlantis");
    }
}
