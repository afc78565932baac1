//! Validation-Related Value Objects
//!
//! Value objects describing the structural checks run against the graph
//! store and their aggregate outcome.

use crate::constants::NEUTRAL_CONFIDENCE;
use serde::{Deserialize, Serialize};

/// Value Object: One Structural Assertion
///
/// A single weighted check performed against the graph store, e.g.
/// "repository exists" or "method exists on class".
///
/// ## Business Rules
///
/// - `weight` is strictly positive
/// - a check that could not be executed is recorded as `passed = false`
///   rather than being dropped from the checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationCheck {
    /// Human-readable name of the assertion
    pub check: String,
    /// Whether the assertion held
    pub passed: bool,
    /// Relative weight of this assertion in the confidence score
    pub weight: f64,
}

impl ValidationCheck {
    /// Create a new check entry
    pub fn new<S: Into<String>>(check: S, passed: bool, weight: f64) -> Self {
        Self {
            check: check.into(),
            passed,
            weight,
        }
    }
}

/// Value Object: Aggregate Validation Outcome
///
/// The verdict derived deterministically from a checklist: weighted-fraction
/// confidence in `[0, 1]`, validity against the minimum threshold, and any
/// remediation suggestions for failed checks.
///
/// Serializes with the `validation_checks` field name used by the public
/// service API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationOutcome {
    /// Whether the result cleared the minimum confidence threshold
    pub is_valid: bool,
    /// Weighted fraction of checks that passed, in `[0, 1]`
    pub confidence_score: f64,
    /// The individual structural assertions
    #[serde(rename = "validation_checks")]
    pub checks: Vec<ValidationCheck>,
    /// Human-readable remediation suggestions for failed checks
    pub suggestions: Vec<String>,
    /// Whether the graph store was actually consulted
    pub graph_validated: bool,
    /// Error message when validation itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationOutcome {
    /// Build an outcome from a scored checklist
    ///
    /// An empty checklist means no structural evidence either way, which is
    /// treated as neutral: confidence 0.5 and `is_valid = true`.
    pub fn from_checks(
        checks: Vec<ValidationCheck>,
        confidence_score: f64,
        min_confidence: f64,
        suggestions: Vec<String>,
        graph_validated: bool,
    ) -> Self {
        let is_valid = checks.is_empty() || confidence_score >= min_confidence;
        Self {
            is_valid,
            confidence_score,
            checks,
            suggestions,
            graph_validated,
            error: None,
        }
    }

    /// Neutral outcome used when the graph store was not consulted
    ///
    /// Attached to every result when the graph store is disabled, and to a
    /// single result whose validation failed with an error.
    pub fn neutral() -> Self {
        Self {
            is_valid: true,
            confidence_score: NEUTRAL_CONFIDENCE,
            checks: Vec::new(),
            suggestions: Vec::new(),
            graph_validated: false,
            error: None,
        }
    }

    /// Neutral outcome carrying the error that prevented validation
    pub fn neutral_with_error<S: Into<String>>(error: S) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::neutral()
        }
    }
}
