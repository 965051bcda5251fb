//! Agro advisory rule-table model.
//!
//! A rule table is a versioned JSON document `{ "rules": [...] }` authored
//! by agronomists, loaded once at startup and treated as immutable
//! afterwards. This crate owns the wire model (rules, conditions,
//! severities), the loader, the fixed context-key vocabulary, and the
//! opt-in strict validation pass.
//!
//! Evaluation lives in `agro-eval`; this crate has no opinion on weather
//! data.

pub mod keys;
pub mod load;
pub mod rules;

pub use load::{load_rules, parse_rules, validate, RuleError, ValidationIssue};
pub use rules::{Condition, Predicate, Rule, RuleSet, Scalar, Severity};
