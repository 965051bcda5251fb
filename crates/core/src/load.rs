//! Rule-table loading and the strict validation pass.
//!
//! Loading is forgiving where the evaluation contract demands it: a
//! condition that does not parse loads as `Predicate::Never` and simply
//! never matches. Only problems that make the document unusable as a
//! whole (unreadable file, invalid JSON, missing `rules` array) are
//! errors.
//!
//! `validate` is the opt-in strict pass for deploy-time checks: it
//! reports everything the forgiving loader swallowed, without changing
//! per-request behavior.

use std::fmt;
use std::path::Path;

use crate::keys;
use crate::rules::RuleSet;

/// Errors raised at the load boundary.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("failed to read rule table {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid rule table {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a rule table from a JSON string.
pub fn parse_rules(json: &str) -> Result<RuleSet, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a rule table from a file.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RuleSet, RuleError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| RuleError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_rules(&text).map_err(|source| RuleError::Parse {
        path: path.display().to_string(),
        source,
    })
}

// ──────────────────────────────────────────────
// Strict validation
// ──────────────────────────────────────────────

/// One finding from the strict pass. Findings never affect evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Id of the offending rule, or its table index when the id is empty.
    pub rule: String,
    pub detail: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule '{}': {}", self.rule, self.detail)
    }
}

/// Report everything the forgiving loader accepted silently: conditions
/// that parsed to `Never`, variables outside the fixed vocabulary, rules
/// with no conditions list, severity labels nobody recognizes.
pub fn validate(rules: &RuleSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (index, rule) in rules.rules.iter().enumerate() {
        let name = if rule.id.is_empty() {
            format!("#{}", index)
        } else {
            rule.id.clone()
        };
        let mut report = |detail: String| {
            issues.push(ValidationIssue {
                rule: name.clone(),
                detail,
            });
        };

        if let crate::rules::Severity::Other(label) = &rule.severity {
            report(format!("unrecognized severity '{}'", label));
        }

        match &rule.conditions {
            None => report("missing conditions list; rule can never trigger".to_string()),
            Some(conditions) => {
                for condition in conditions {
                    if let crate::rules::Predicate::Never { operator } = &condition.predicate {
                        report(format!(
                            "condition on '{}' has unusable operator '{}'",
                            condition.variable, operator
                        ));
                    }
                    if !keys::is_known(&condition.variable) {
                        report(format!(
                            "condition references unknown variable '{}'",
                            condition.variable
                        ));
                    }
                }
            }
        }
    }

    issues
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
