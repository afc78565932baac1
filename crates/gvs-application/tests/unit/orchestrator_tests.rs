//! Validation orchestrator tests

use gvs_application::domain_services::{StructuralValidator, ValidationOrchestrator};
use gvs_domain::value_objects::SearchResult;
use gvs_infrastructure::cache::PerformanceCache;
use gvs_infrastructure::config::ValidationConfig;
use gvs_infrastructure::resilience::{BatchProcessor, CircuitBreaker};
use gvs_providers::graph_store::InMemoryGraphStoreProvider;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

fn seeded_graph() -> Arc<InMemoryGraphStoreProvider> {
    let graph = InMemoryGraphStoreProvider::new();
    graph.add_repository("auth-service");
    graph.add_class("AuthService");
    graph.add_method("AuthService", "authenticate");
    Arc::new(graph)
}

fn orchestrator(
    graph: Option<Arc<InMemoryGraphStoreProvider>>,
    cache: Arc<PerformanceCache>,
) -> ValidationOrchestrator {
    let validator = graph.map(|graph| {
        Arc::new(StructuralValidator::new(
            graph as Arc<dyn gvs_domain::ports::GraphStoreProvider>,
            Arc::new(CircuitBreaker::new("graph_store")),
            ValidationConfig::default(),
            Duration::from_secs(10),
        ))
    });
    ValidationOrchestrator::new(
        validator,
        cache,
        true,
        Duration::from_secs(3600),
        BatchProcessor::new(),
    )
}

fn method_result(method: &str, similarity: f64) -> SearchResult {
    SearchResult {
        content: format!("def {method}(): ..."),
        metadata: HashMap::from([
            ("code_type".to_string(), json!("method")),
            ("method_name".to_string(), json!(method)),
            ("class_name".to_string(), json!("AuthService")),
            ("repository_id".to_string(), json!("auth-service")),
        ]),
        similarity,
    }
}

#[tokio::test]
async fn graph_disabled_attaches_neutral_outcomes() {
    let orchestrator = orchestrator(None, Arc::new(PerformanceCache::new()));
    let results = vec![
        method_result("authenticate", 0.9),
        method_result("super_authenticate", 0.8),
    ];

    let validated = orchestrator.validate(results, true, true).await;
    assert_eq!(validated.len(), 2);
    for entry in &validated {
        assert!(entry.validation.is_valid);
        assert!(!entry.validation.graph_validated);
        assert!((entry.validation.confidence_score - 0.5).abs() < 1e-9);
        assert!(entry.validation.checks.is_empty());
    }
}

#[tokio::test]
async fn parallel_and_sequential_agree() {
    let cache_a = Arc::new(PerformanceCache::new());
    let cache_b = Arc::new(PerformanceCache::new());
    let results = vec![
        method_result("authenticate", 0.9),
        method_result("super_authenticate", 0.8),
    ];

    let parallel = orchestrator(Some(seeded_graph()), cache_a)
        .validate(results.clone(), true, false)
        .await;
    let sequential = orchestrator(Some(seeded_graph()), cache_b)
        .validate(results, false, false)
        .await;

    assert_eq!(parallel.len(), sequential.len());
    for (p, s) in parallel.iter().zip(&sequential) {
        assert_eq!(p.result.content, s.result.content);
        assert_eq!(p.validation.is_valid, s.validation.is_valid);
        assert!((p.validation.confidence_score - s.validation.confidence_score).abs() < 1e-9);
    }
}

#[tokio::test]
async fn outcomes_are_cached_per_result() {
    let cache = Arc::new(PerformanceCache::new());
    let orchestrator = orchestrator(Some(seeded_graph()), Arc::clone(&cache));
    let results = vec![method_result("authenticate", 0.9)];

    let first = orchestrator.validate(results.clone(), false, false).await;
    let stats = cache.stats().await;
    assert_eq!(stats.size, 1);
    assert_eq!(stats.misses, 1);

    let second = orchestrator.validate(results, false, false).await;
    let stats = cache.stats().await;
    assert_eq!(stats.hits, 1);
    assert_eq!(first[0].validation, second[0].validation);
}

#[tokio::test]
async fn output_order_matches_input_order_in_parallel() {
    let orchestrator = orchestrator(Some(seeded_graph()), Arc::new(PerformanceCache::new()));
    let results: Vec<SearchResult> = (0..8)
        .map(|i| method_result(&format!("method_{i}"), 0.9 - i as f64 * 0.05))
        .collect();

    let validated = orchestrator.validate(results, true, false).await;
    for (i, entry) in validated.iter().enumerate() {
        assert!(entry.result.content.contains(&format!("method_{i}")));
    }
}

#[tokio::test]
async fn clear_cache_forces_revalidation() {
    let cache = Arc::new(PerformanceCache::new());
    let orchestrator = orchestrator(Some(seeded_graph()), Arc::clone(&cache));
    let results = vec![method_result("authenticate", 0.9)];

    orchestrator.validate(results.clone(), false, false).await;
    orchestrator.clear_cache().await.unwrap();
    orchestrator.validate(results, false, false).await;

    let stats = cache.stats().await;
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 0);
}
