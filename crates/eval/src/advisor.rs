//! Rule evaluation and advisory construction.
//!
//! A rule triggers when every one of its conditions holds against the
//! context; all triggering rules emit an advisory, in table order. The
//! evaluator itself cannot fail: absent facts, type mismatches and
//! malformed conditions all evaluate false, so one bad rule silences
//! itself instead of aborting the pass. When nothing triggers, a single
//! synthetic all-clear advisory keeps the output non-empty.

use agro_core::{Condition, Predicate, Rule, RuleSet, Severity};
use serde::Serialize;

use crate::context::Context;

// ──────────────────────────────────────────────
// Output types
// ──────────────────────────────────────────────

/// Simplified styling class the UI renders with. Severities `danger` and
/// `alert` collapse onto `danger`; `success` only appears on the
/// fallback advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationType {
    Danger,
    Warning,
    Success,
    Info,
}

impl PresentationType {
    pub fn label(&self) -> &'static str {
        match self {
            PresentationType::Danger => "danger",
            PresentationType::Warning => "warning",
            PresentationType::Success => "success",
            PresentationType::Info => "info",
        }
    }
}

/// One user-facing recommendation. Transient: constructed per evaluation
/// call, embedded in the response, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    #[serde(rename = "type")]
    pub kind: PresentationType,
    pub title: String,
    pub message: String,
    pub icon: String,
}

impl Advisory {
    /// The fallback emitted when no rule triggers.
    pub fn all_clear() -> Advisory {
        Advisory {
            kind: PresentationType::Success,
            title: "Conditions Stable".to_string(),
            message: "No critical weather alerts detected for now. Routine monitoring advised."
                .to_string(),
            icon: "Plant".to_string(),
        }
    }
}

// ──────────────────────────────────────────────
// Condition evaluation
// ──────────────────────────────────────────────

/// Test one condition against the context.
///
/// An absent fact is false, never an error: data we do not have must not
/// trigger an advisory. Likewise a numeric comparison against a boolean
/// fact is false rather than a type error.
pub fn eval_condition(condition: &Condition, context: &Context) -> bool {
    let Some(actual) = context.get(&condition.variable) else {
        return false;
    };
    let number = actual.as_number();
    match &condition.predicate {
        Predicate::Gt(threshold) => number.map(|n| n > *threshold).unwrap_or(false),
        Predicate::Lt(threshold) => number.map(|n| n < *threshold).unwrap_or(false),
        Predicate::Gte(threshold) => number.map(|n| n >= *threshold).unwrap_or(false),
        Predicate::Lte(threshold) => number.map(|n| n <= *threshold).unwrap_or(false),
        // Inclusive at both bounds.
        Predicate::Between(low, high) => number.map(|n| *low <= n && n <= *high).unwrap_or(false),
        Predicate::Eq(expected) => actual == *expected,
        Predicate::Never { .. } => false,
    }
}

// ──────────────────────────────────────────────
// Severity and icon mapping
// ──────────────────────────────────────────────

/// Collapse the author's severity onto a presentation type. Unknown
/// labels render as plain info.
pub fn presentation_for(severity: &Severity) -> PresentationType {
    match severity {
        Severity::Danger | Severity::Alert => PresentationType::Danger,
        Severity::Warning => PresentationType::Warning,
        Severity::Info | Severity::Other(_) => PresentationType::Info,
    }
}

/// Default icons key off the raw severity label, not the mapped
/// presentation type: an `alert` rule without an explicit icon gets
/// `Warning`, even though it renders with danger styling.
fn default_icon(severity: &Severity) -> &'static str {
    match severity {
        Severity::Danger => "WarningCircle",
        Severity::Alert | Severity::Warning => "Warning",
        Severity::Other(label) if label == "success" => "CheckCircle",
        Severity::Info | Severity::Other(_) => "Info",
    }
}

fn resolve_icon(rule: &Rule) -> String {
    match &rule.icon {
        Some(icon) => icon.clone(),
        None => default_icon(&rule.severity).to_string(),
    }
}

// ──────────────────────────────────────────────
// Rule evaluation
// ──────────────────────────────────────────────

/// Apply the rule table to a context.
///
/// Rules are tested in table order and every triggering rule emits an
/// advisory; there is no first-match cutoff and no deduplication. A rule
/// with an empty conditions list is vacuously true and always fires; a
/// rule whose conditions list is missing entirely is a config defect and
/// never fires.
pub fn evaluate(rules: &RuleSet, context: &Context) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    for rule in &rules.rules {
        let triggered = match &rule.conditions {
            Some(conditions) => conditions.iter().all(|c| eval_condition(c, context)),
            None => false,
        };
        if triggered {
            advisories.push(Advisory {
                kind: presentation_for(&rule.severity),
                title: rule.title.clone(),
                message: rule.message.clone(),
                icon: resolve_icon(rule),
            });
        }
    }

    if advisories.is_empty() {
        advisories.push(Advisory::all_clear());
    }

    advisories
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
