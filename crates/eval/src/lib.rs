//! Agro advisory engine -- derives an evaluation context from a raw
//! weather observation and applies a declarative rule table to it.
//!
//! Two stages, evaluated leaf-first: `context::build_context` turns the
//! observation into a flat fact mapping, then `advisor::evaluate` tests
//! every rule against it and emits advisories for the ones that hold.
//! Both stages are pure; the rule table is an explicit argument, never
//! ambient state, so concurrent evaluations need no coordination.

pub mod advisor;
pub mod context;
pub mod observation;
pub mod provider;

pub use advisor::{evaluate, Advisory, PresentationType};
pub use context::{build_context, Context};
pub use observation::Observation;
pub use provider::{ObservationProvider, ProviderError, StaticObservationProvider};

use agro_core::RuleSet;

/// Evaluate one observation against a rule table.
///
/// Never fails and never returns an empty list: when no rule triggers,
/// the single all-clear advisory is returned instead.
pub fn advise(rules: &RuleSet, observation: &Observation) -> Vec<Advisory> {
    let context = build_context(observation);
    evaluate(rules, &context)
}
