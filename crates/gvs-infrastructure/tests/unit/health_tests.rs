//! Health monitor aggregation tests

use async_trait::async_trait;
use gvs_domain::error::{Error, Result};
use gvs_domain::ports::{GraphRecord, GraphSession, GraphStoreProvider, VectorSearchProvider};
use gvs_infrastructure::cache::PerformanceCache;
use gvs_infrastructure::health::{ComponentStatus, HealthMonitor, OverallStatus};
use gvs_infrastructure::resilience::CircuitBreaker;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

struct StubVectorStore {
    healthy: bool,
}

#[async_trait]
impl VectorSearchProvider for StubVectorStore {
    async fn search_code_examples(
        &self,
        _query: &str,
        _match_count: usize,
        _filter_metadata: Option<&HashMap<String, Value>>,
    ) -> Result<Vec<gvs_domain::SearchResult>> {
        if self.healthy {
            Ok(vec![])
        } else {
            Err(Error::vector_db("store unreachable"))
        }
    }

    fn provider_name(&self) -> &str {
        "stub_vector"
    }
}

struct StubGraphSession {
    healthy: bool,
}

#[async_trait]
impl GraphSession for StubGraphSession {
    async fn run(
        &mut self,
        _statement: &str,
        _params: HashMap<String, Value>,
    ) -> Result<Vec<GraphRecord>> {
        if self.healthy {
            Ok(vec![GraphRecord::new(HashMap::from([(
                "ok".to_string(),
                Value::from(1),
            )]))])
        } else {
            Err(Error::graph_db("connection refused"))
        }
    }

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

struct StubGraphStore {
    healthy: bool,
}

#[async_trait]
impl GraphStoreProvider for StubGraphStore {
    async fn session(&self) -> Result<Box<dyn GraphSession>> {
        Ok(Box::new(StubGraphSession {
            healthy: self.healthy,
        }))
    }

    fn provider_name(&self) -> &str {
        "stub_graph"
    }
}

fn monitor(vector_healthy: bool, graph: Option<bool>) -> HealthMonitor {
    HealthMonitor::new(
        Arc::new(StubVectorStore {
            healthy: vector_healthy,
        }),
        graph.map(|healthy| Arc::new(StubGraphStore { healthy }) as Arc<dyn GraphStoreProvider>),
        Arc::new(CircuitBreaker::new("graph_store")),
        Arc::new(PerformanceCache::new()),
    )
}

#[tokio::test]
async fn both_stores_healthy_is_fully_operational() {
    let report = monitor(true, Some(true)).get_integration_health().await;
    assert_eq!(report.overall_status, OverallStatus::FullyOperational);
    assert_eq!(report.vector_store.status, ComponentStatus::Healthy);
    assert_eq!(report.graph_store.status, ComponentStatus::Healthy);
    assert!(report.is_operational());
}

#[tokio::test]
async fn failing_graph_store_is_partially_operational() {
    let report = monitor(true, Some(false)).get_integration_health().await;
    assert_eq!(report.overall_status, OverallStatus::PartiallyOperational);
    assert_eq!(report.graph_store.status, ComponentStatus::Error);
    assert!(report.graph_store.error.is_some());
    assert!(report.is_operational());
}

#[tokio::test]
async fn unconfigured_graph_store_is_partially_operational() {
    let report = monitor(true, None).get_integration_health().await;
    assert_eq!(report.overall_status, OverallStatus::PartiallyOperational);
    assert_eq!(report.graph_store.status, ComponentStatus::Unavailable);
    assert!(report.graph_store.error.is_none());
}

#[tokio::test]
async fn failing_vector_store_with_healthy_graph_is_partially_operational() {
    let report = monitor(false, Some(true)).get_integration_health().await;
    assert_eq!(report.overall_status, OverallStatus::PartiallyOperational);
    assert_eq!(report.vector_store.status, ComponentStatus::Error);
    assert_eq!(report.graph_store.status, ComponentStatus::Healthy);
    assert!(report.is_operational());
}

#[tokio::test]
async fn both_stores_failing_is_unavailable() {
    let report = monitor(false, Some(false)).get_integration_health().await;
    assert_eq!(report.overall_status, OverallStatus::Unavailable);
    assert!(!report.is_operational());
}

#[tokio::test]
async fn failing_vector_store_without_graph_store_is_unavailable() {
    let report = monitor(false, None).get_integration_health().await;
    assert_eq!(report.overall_status, OverallStatus::Unavailable);
    assert_eq!(report.graph_store.status, ComponentStatus::Unavailable);
    assert!(!report.is_operational());
}

#[tokio::test]
async fn report_carries_breaker_and_cache_snapshots() {
    let report = monitor(true, Some(true)).get_integration_health().await;
    assert_eq!(report.circuit_breaker.failure_count, 0);
    assert_eq!(report.cache.hits, 0);
    assert_eq!(report.cache.size, 0);
}
