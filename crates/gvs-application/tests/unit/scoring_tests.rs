//! Confidence scoring tests

use gvs_application::domain_services::ConfidenceScorer;
use gvs_domain::value_objects::{
    SearchResult, ValidatedResult, ValidationCheck, ValidationOutcome,
};
use std::collections::HashMap;

const EPSILON: f64 = 1e-9;

fn checks(entries: &[(f64, bool)]) -> Vec<ValidationCheck> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (weight, passed))| ValidationCheck::new(format!("check_{i}"), *passed, *weight))
        .collect()
}

#[test]
fn weighted_fraction_of_passed_checks() {
    let scorer = ConfidenceScorer::new();
    let score = scorer.confidence_score(&checks(&[(0.3, true), (0.4, true), (0.3, false)]));
    assert!((score - 0.7).abs() < EPSILON);
}

#[test]
fn all_passed_scores_one_and_none_scores_zero() {
    let scorer = ConfidenceScorer::new();
    assert!((scorer.confidence_score(&checks(&[(0.3, true), (0.7, true)])) - 1.0).abs() < EPSILON);
    assert!(scorer.confidence_score(&checks(&[(0.3, false), (0.7, false)])).abs() < EPSILON);
}

#[test]
fn empty_checklist_is_neutral() {
    let scorer = ConfidenceScorer::new();
    assert!((scorer.confidence_score(&[]) - 0.5).abs() < EPSILON);
}

#[test]
fn weights_need_not_sum_to_one() {
    let scorer = ConfidenceScorer::new();
    // 0.3 passed out of 0.3 + 0.4 total
    let score = scorer.confidence_score(&checks(&[(0.3, true), (0.4, false)]));
    assert!((score - 0.3 / 0.7).abs() < EPSILON);
}

#[test]
fn combined_score_blends_similarity_and_confidence() {
    let scorer = ConfidenceScorer::new();
    let combined = scorer.combined_score(0.8, 0.9);
    assert!((combined - 0.86).abs() < EPSILON);
}

fn validated(name: &str, similarity: f64, confidence: f64) -> ValidatedResult {
    let result = SearchResult {
        content: name.to_string(),
        metadata: HashMap::new(),
        similarity,
    };
    let outcome = ValidationOutcome::from_checks(
        vec![ValidationCheck::new("check", true, 1.0)],
        confidence,
        0.6,
        Vec::new(),
        true,
    );
    ValidatedResult::new(result, outcome)
}

#[test]
fn rank_orders_by_combined_score_descending() {
    let scorer = ConfidenceScorer::new();
    let mut results = vec![
        validated("low", 0.5, 0.4),   // 0.44
        validated("high", 0.9, 0.95), // 0.93
        validated("mid", 0.8, 0.6),   // 0.68
    ];
    scorer.rank(&mut results);

    let order: Vec<_> = results.iter().map(|r| r.result.content.as_str()).collect();
    assert_eq!(order, vec!["high", "mid", "low"]);
}

#[test]
fn rank_keeps_incoming_order_for_ties() {
    let scorer = ConfidenceScorer::new();
    let mut results = vec![
        validated("first", 0.7, 0.7),
        validated("second", 0.7, 0.7),
        validated("third", 0.7, 0.7),
    ];
    scorer.rank(&mut results);

    let order: Vec<_> = results.iter().map(|r| r.result.content.as_str()).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}
