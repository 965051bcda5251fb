//! Rule, condition and severity wire types.
//!
//! The wire format keeps conditions as `{ variable, operator, value }`
//! triples; in Rust the operator+value pair is folded into the closed
//! `Predicate` variant so evaluation is an exhaustive match. A condition
//! whose wire form does not parse (unknown operator, malformed value)
//! becomes `Predicate::Never`, which matches nothing: one bad condition
//! silences its rule instead of failing the whole table load.

use serde::{Deserialize, Deserializer, Serialize};

// ──────────────────────────────────────────────
// Scalars
// ──────────────────────────────────────────────

/// A single fact value: every context entry and `eq` comparand is one of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Bool(bool),
}

impl Scalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Bool(_) => None,
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

// ──────────────────────────────────────────────
// Predicates
// ──────────────────────────────────────────────

/// The comparison a condition applies to its context variable.
///
/// `Between` is inclusive at both bounds. `Never` stands in for a wire
/// condition that did not parse; it evaluates false unconditionally and
/// carries the raw operator string for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Gt(f64),
    Lt(f64),
    Gte(f64),
    Lte(f64),
    Between(f64, f64),
    Eq(Scalar),
    Never { operator: String },
}

impl Predicate {
    /// Fold an operator string and its JSON value into a predicate.
    /// Anything unrecognized or malformed becomes `Never`.
    fn parse(operator: &str, value: &serde_json::Value) -> Predicate {
        let parsed = match operator {
            "gt" => value.as_f64().map(Predicate::Gt),
            "lt" => value.as_f64().map(Predicate::Lt),
            "gte" => value.as_f64().map(Predicate::Gte),
            "lte" => value.as_f64().map(Predicate::Lte),
            "between" => value.as_array().and_then(|bounds| {
                if bounds.len() != 2 {
                    return None;
                }
                Some(Predicate::Between(bounds[0].as_f64()?, bounds[1].as_f64()?))
            }),
            "eq" => value
                .as_f64()
                .map(Scalar::Number)
                .or_else(|| value.as_bool().map(Scalar::Bool))
                .map(Predicate::Eq),
            _ => None,
        };
        parsed.unwrap_or_else(|| Predicate::Never {
            operator: operator.to_string(),
        })
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Predicate::Never { .. })
    }
}

// ──────────────────────────────────────────────
// Conditions
// ──────────────────────────────────────────────

/// One predicate over one context variable.
///
/// Accepts both `variable` and the legacy `var` field name used by older
/// rule tables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawCondition")]
pub struct Condition {
    pub variable: String,
    pub predicate: Predicate,
}

#[derive(Deserialize)]
struct RawCondition {
    #[serde(alias = "var")]
    variable: String,
    operator: String,
    #[serde(default)]
    value: serde_json::Value,
}

impl From<RawCondition> for Condition {
    fn from(raw: RawCondition) -> Self {
        Condition {
            predicate: Predicate::parse(&raw.operator, &raw.value),
            variable: raw.variable,
        }
    }
}

// ──────────────────────────────────────────────
// Severity
// ──────────────────────────────────────────────

/// The rule author's classification. Distinct from the presentation type
/// the UI styles with: `alert` and `danger` both render as danger, but the
/// default-icon table keys off this raw label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Alert,
    Warning,
    Info,
    /// Any label outside the known vocabulary. Renders as `info`.
    Other(String),
}

impl Severity {
    pub fn parse(label: &str) -> Severity {
        match label {
            "danger" => Severity::Danger,
            "alert" => Severity::Alert,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            other => Severity::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Severity::Danger => "danger",
            Severity::Alert => "alert",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Other(label) => label,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Severity::parse(&label))
    }
}

// ──────────────────────────────────────────────
// Rules
// ──────────────────────────────────────────────

/// One advisory rule: a conjunction of conditions plus the advisory text
/// to emit when all of them hold.
///
/// `conditions` distinguishes "present but empty" (vacuously true, the
/// rule always fires) from "missing entirely" (config defect, the rule
/// never fires). Both are deliberate; see the evaluator.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub conditions: Option<Vec<Condition>>,
}

/// The ordered rule table. Evaluation order is table order, and that
/// order is preserved in the output.
///
/// Immutable after load. Systems that hot-reload the table swap a whole
/// `Arc<RuleSet>` so no evaluation observes a partial update.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
