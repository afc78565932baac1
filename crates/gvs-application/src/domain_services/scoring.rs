//! Confidence Scoring Service
//!
//! Pure functions converting a weighted checklist into a confidence score
//! and blending it with semantic similarity into a ranking score. No
//! suspension points; everything here is deterministic.

use gvs_domain::ValidatedResult;
use gvs_domain::constants::{CONFIDENCE_WEIGHT, NEUTRAL_CONFIDENCE, SIMILARITY_WEIGHT};
use gvs_domain::value_objects::ValidationCheck;

/// Confidence scorer
///
/// ## Business Rules
///
/// - `confidence_score = Σ(weight × passed) / Σ(weight)`; an empty
///   checklist scores neutral (0.5) because there is no structural
///   evidence either way
/// - `combined_score` weights confidence higher than similarity because
///   structural validation is the higher-trust signal
/// - ranking is strictly by combined score descending; ties keep the
///   incoming relative order (stable sort)
///
/// # Example
///
/// ```rust
/// use gvs_application::domain_services::ConfidenceScorer;
/// use gvs_domain::value_objects::ValidationCheck;
///
/// let scorer = ConfidenceScorer::new();
/// let checks = vec![
///     ValidationCheck::new("repository_exists", true, 0.3),
///     ValidationCheck::new("method_exists", true, 0.4),
///     ValidationCheck::new("signature_plausible", false, 0.3),
/// ];
/// assert!((scorer.confidence_score(&checks) - 0.7).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    similarity_weight: f64,
    confidence_weight: f64,
}

impl ConfidenceScorer {
    /// Create a scorer with the default similarity/confidence blend
    pub fn new() -> Self {
        Self {
            similarity_weight: SIMILARITY_WEIGHT,
            confidence_weight: CONFIDENCE_WEIGHT,
        }
    }

    /// Create a scorer with an explicit similarity/confidence blend
    pub fn with_weights(similarity_weight: f64, confidence_weight: f64) -> Self {
        Self {
            similarity_weight,
            confidence_weight,
        }
    }

    /// Weighted fraction of checks that passed, in `[0, 1]`
    ///
    /// Returns the neutral score (0.5) for an empty checklist.
    pub fn confidence_score(&self, checks: &[ValidationCheck]) -> f64 {
        let total_weight: f64 = checks.iter().map(|c| c.weight).sum();
        if total_weight <= 0.0 {
            return NEUTRAL_CONFIDENCE;
        }
        let passed_weight: f64 = checks
            .iter()
            .filter(|c| c.passed)
            .map(|c| c.weight)
            .sum();
        (passed_weight / total_weight).clamp(0.0, 1.0)
    }

    /// Ranking score blending semantic similarity and confidence
    pub fn combined_score(&self, similarity: f64, confidence: f64) -> f64 {
        self.similarity_weight * similarity + self.confidence_weight * confidence
    }

    /// Combined score of one validated result
    pub fn score_result(&self, result: &ValidatedResult) -> f64 {
        self.combined_score(
            result.result.similarity,
            result.validation.confidence_score,
        )
    }

    /// Sort results by combined score, descending, preserving the incoming
    /// order of ties
    pub fn rank(&self, results: &mut [ValidatedResult]) {
        results.sort_by(|a, b| {
            self.score_result(b)
                .total_cmp(&self.score_result(a))
        });
    }
}
