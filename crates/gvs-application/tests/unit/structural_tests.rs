//! Structural validator tests against the in-memory graph

use gvs_application::domain_services::StructuralValidator;
use gvs_domain::value_objects::SearchResult;
use gvs_infrastructure::config::ValidationConfig;
use gvs_infrastructure::resilience::CircuitBreaker;
use gvs_providers::graph_store::InMemoryGraphStoreProvider;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const EPSILON: f64 = 1e-9;

fn seeded_graph() -> Arc<InMemoryGraphStoreProvider> {
    let graph = InMemoryGraphStoreProvider::new();
    graph.add_repository("auth-service");
    graph.add_class("AuthService");
    graph.add_method("AuthService", "authenticate");
    graph.add_function("hash_password");
    Arc::new(graph)
}

fn validator(graph: Arc<InMemoryGraphStoreProvider>) -> StructuralValidator {
    StructuralValidator::new(
        graph,
        Arc::new(CircuitBreaker::new("graph_store")),
        ValidationConfig::default(),
        Duration::from_secs(10),
    )
}

fn result(metadata: &[(&str, &str)], similarity: f64) -> SearchResult {
    SearchResult {
        content: "code".to_string(),
        metadata: metadata
            .iter()
            .map(|(k, v)| ((*k).to_string(), json!(v)))
            .collect::<HashMap<String, Value>>(),
        similarity,
    }
}

#[tokio::test]
async fn existing_method_passes_all_checks() {
    let validator = validator(seeded_graph());
    let result = result(
        &[
            ("code_type", "method"),
            ("method_name", "authenticate"),
            ("class_name", "AuthService"),
            ("repository_id", "auth-service"),
        ],
        0.92,
    );

    let outcome = validator.validate_result(&result, true).await;
    assert!(outcome.is_valid);
    assert!(outcome.graph_validated);
    assert!((outcome.confidence_score - 1.0).abs() < EPSILON);
    assert_eq!(outcome.checks.len(), 3);
    assert!(outcome.checks.iter().all(|c| c.passed));
    assert!(outcome.suggestions.is_empty());
}

#[tokio::test]
async fn missing_method_fails_with_suggestion() {
    let validator = validator(seeded_graph());
    let result = result(
        &[
            ("code_type", "method"),
            ("method_name", "super_authenticate"),
            ("repository_id", "auth-service"),
        ],
        0.85,
    );

    let outcome = validator.validate_result(&result, true).await;
    assert!(!outcome.is_valid);
    // Repository check (0.3) passes, method check (0.4) fails, no
    // signature check since the method was not found
    assert!((outcome.confidence_score - 0.3 / 0.7).abs() < EPSILON);
    assert_eq!(outcome.checks.len(), 2);
    assert!(
        outcome
            .suggestions
            .iter()
            .any(|s| s.contains("super_authenticate"))
    );
}

#[tokio::test]
async fn method_without_class_scope_searches_all_classes() {
    let validator = validator(seeded_graph());
    let result = result(
        &[
            ("code_type", "method"),
            ("method_name", "authenticate"),
            ("repository_id", "auth-service"),
        ],
        0.9,
    );

    let outcome = validator.validate_result(&result, false).await;
    assert!(outcome.is_valid);
    assert!((outcome.confidence_score - 1.0).abs() < EPSILON);
}

#[tokio::test]
async fn existing_class_gets_structure_check() {
    let validator = validator(seeded_graph());
    let result = result(
        &[
            ("code_type", "class"),
            ("class_name", "AuthService"),
            ("repository_id", "auth-service"),
        ],
        0.9,
    );

    let outcome = validator.validate_result(&result, false).await;
    assert!(outcome.is_valid);
    assert_eq!(outcome.checks.len(), 3);
    assert!(
        outcome
            .checks
            .iter()
            .any(|c| c.check == "structure_plausible" && c.passed)
    );
}

#[tokio::test]
async fn missing_class_skips_structure_check() {
    let validator = validator(seeded_graph());
    let result = result(
        &[
            ("code_type", "class"),
            ("class_name", "PhantomService"),
            ("repository_id", "auth-service"),
        ],
        0.9,
    );

    let outcome = validator.validate_result(&result, false).await;
    assert!(!outcome.is_valid);
    assert_eq!(outcome.checks.len(), 2);
}

#[tokio::test]
async fn function_checks_use_the_heavier_weight() {
    let validator = validator(seeded_graph());
    let found = result(
        &[
            ("code_type", "function"),
            ("name", "hash_password"),
            ("repository_id", "auth-service"),
        ],
        0.9,
    );
    let outcome = validator.validate_result(&found, false).await;
    assert!(outcome.is_valid);
    assert!((outcome.confidence_score - 1.0).abs() < EPSILON);

    let missing = result(
        &[
            ("code_type", "function"),
            ("name", "phantom_fn"),
            ("repository_id", "auth-service"),
        ],
        0.9,
    );
    let outcome = validator.validate_result(&missing, false).await;
    // Repository (0.3) passes, function (0.7) fails
    assert!((outcome.confidence_score - 0.3).abs() < EPSILON);
    assert!(!outcome.is_valid);
}

#[tokio::test]
async fn unknown_code_type_scores_neutral() {
    let validator = validator(seeded_graph());
    let result = result(
        &[("code_type", "module"), ("repository_id", "auth-service")],
        0.9,
    );

    let outcome = validator.validate_result(&result, false).await;
    assert!((outcome.confidence_score - 0.5).abs() < EPSILON);
    assert!(outcome.graph_validated);
    assert_eq!(outcome.checks.len(), 1);
}

#[tokio::test]
async fn missing_identifiers_short_circuit_to_failed_checks() {
    let validator = validator(seeded_graph());
    // No method name and no repository id at all
    let result = result(&[("code_type", "method")], 0.9);

    let outcome = validator.validate_result(&result, false).await;
    assert!(!outcome.is_valid);
    assert!(outcome.checks.iter().all(|c| !c.passed));
    assert!(outcome.confidence_score.abs() < EPSILON);
}

#[tokio::test]
async fn query_failure_is_recorded_as_failed_check_only() {
    let graph = seeded_graph();
    // First query (repository check) fails, the rest succeed
    graph.fail_next_runs(1);
    let validator = validator(Arc::clone(&graph));
    let result = result(
        &[
            ("code_type", "method"),
            ("method_name", "authenticate"),
            ("class_name", "AuthService"),
            ("repository_id", "auth-service"),
        ],
        0.9,
    );

    let outcome = validator.validate_result(&result, false).await;
    // Repository check failed, method and signature checks still ran
    assert_eq!(outcome.checks.len(), 3);
    assert!(!outcome.checks[0].passed);
    assert!(outcome.checks[1].passed);
    assert!((outcome.confidence_score - 0.7).abs() < EPSILON);
}
