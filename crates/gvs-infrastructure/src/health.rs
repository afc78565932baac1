//! Store health probes and aggregate availability
//!
//! Probes each backing store through its port's `health_check` and combines
//! the results (plus circuit breaker and cache snapshots) into one
//! integration-level health report.

use crate::cache::{CacheStats, PerformanceCache};
use crate::constants::HEALTH_CHECK_TIMEOUT_SECS;
use crate::logging::log_health_check;
use crate::resilience::{CircuitBreaker, CircuitBreakerSnapshot};
use crate::utils::with_timeout;
use gvs_domain::ports::{GraphStoreProvider, VectorSearchProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Health of a single component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    /// Probe succeeded
    Healthy,
    /// Component is not configured
    Unavailable,
    /// Probe failed or timed out
    Error,
}

impl ComponentStatus {
    /// Check if the component answered its probe
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

/// Probe result for one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub component: String,
    /// Probe outcome
    pub status: ComponentStatus,
    /// Probe latency in milliseconds
    pub latency_ms: u64,
    /// Error message when the probe failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the probe ran
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ComponentHealth {
    /// Create a successful probe result
    pub fn healthy<S: Into<String>>(component: S, latency: Duration) -> Self {
        Self {
            component: component.into(),
            status: ComponentStatus::Healthy,
            latency_ms: latency.as_millis() as u64,
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a failed probe result
    pub fn failed<S: Into<String>>(component: S, latency: Duration, error: String) -> Self {
        Self {
            component: component.into(),
            status: ComponentStatus::Error,
            latency_ms: latency.as_millis() as u64,
            error: Some(error),
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a result for a component that is not configured
    pub fn unavailable<S: Into<String>>(component: S) -> Self {
        Self {
            component: component.into(),
            status: ComponentStatus::Unavailable,
            latency_ms: 0,
            error: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Aggregate availability across the stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Both stores answered their probes
    FullyOperational,
    /// Exactly one store is down; the other can still serve
    PartiallyOperational,
    /// Neither store answered its probe
    Unavailable,
}

/// Integration-level health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationHealth {
    /// Aggregate availability
    pub overall_status: OverallStatus,
    /// Vector store probe result
    pub vector_store: ComponentHealth,
    /// Graph store probe result
    pub graph_store: ComponentHealth,
    /// Circuit breaker snapshot for the graph store
    pub circuit_breaker: CircuitBreakerSnapshot,
    /// Validation cache counters
    pub cache: CacheStats,
    /// When the report was assembled
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl IntegrationHealth {
    /// Check if validated search can serve requests at all
    pub fn is_operational(&self) -> bool {
        self.overall_status != OverallStatus::Unavailable
    }
}

/// Health monitor over the search stores
///
/// Probes are bounded by [`HEALTH_CHECK_TIMEOUT_SECS`] so a hung store
/// cannot stall the health endpoint.
///
/// # Example
///
/// ```ignore
/// use gvs_infrastructure::health::HealthMonitor;
///
/// let monitor = HealthMonitor::new(vector_store, Some(graph_store), breaker, cache);
/// let report = monitor.get_integration_health().await;
/// if !report.is_operational() {
///     // alert
/// }
/// ```
pub struct HealthMonitor {
    vector_store: Arc<dyn VectorSearchProvider>,
    graph_store: Option<Arc<dyn GraphStoreProvider>>,
    breaker: Arc<CircuitBreaker>,
    cache: Arc<PerformanceCache>,
}

impl HealthMonitor {
    /// Create a monitor over the configured stores
    pub fn new(
        vector_store: Arc<dyn VectorSearchProvider>,
        graph_store: Option<Arc<dyn GraphStoreProvider>>,
        breaker: Arc<CircuitBreaker>,
        cache: Arc<PerformanceCache>,
    ) -> Self {
        Self {
            vector_store,
            graph_store,
            breaker,
            cache,
        }
    }

    /// Probe the vector store
    pub async fn check_vector_store(&self) -> ComponentHealth {
        let started = Instant::now();
        let result = with_timeout(
            "vector_store_health",
            Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS),
            self.vector_store.health_check(),
        )
        .await;

        let health = match result {
            Ok(()) => ComponentHealth::healthy(self.vector_store.provider_name(), started.elapsed()),
            Err(e) => ComponentHealth::failed(
                self.vector_store.provider_name(),
                started.elapsed(),
                e.to_string(),
            ),
        };
        log_health_check(
            &health.component,
            health.status.is_healthy(),
            health.error.as_deref(),
        );
        health
    }

    /// Probe the graph store, or report it unavailable when not configured
    pub async fn check_graph_store(&self) -> ComponentHealth {
        let Some(graph_store) = &self.graph_store else {
            return ComponentHealth::unavailable("graph_store");
        };

        let started = Instant::now();
        let result = with_timeout(
            "graph_store_health",
            Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS),
            graph_store.health_check(),
        )
        .await;

        let health = match result {
            Ok(()) => ComponentHealth::healthy(graph_store.provider_name(), started.elapsed()),
            Err(e) => ComponentHealth::failed(
                graph_store.provider_name(),
                started.elapsed(),
                e.to_string(),
            ),
        };
        log_health_check(
            &health.component,
            health.status.is_healthy(),
            health.error.as_deref(),
        );
        health
    }

    /// Assemble the integration-level health report
    ///
    /// ## Business Rules
    ///
    /// - both probes passing means `fully_operational`
    /// - both components down (failing or unconfigured) means `unavailable`
    /// - anything in between means `partially_operational`: one store can
    ///   still serve, validated or not
    pub async fn get_integration_health(&self) -> IntegrationHealth {
        let vector_store = self.check_vector_store().await;
        let graph_store = self.check_graph_store().await;

        let vector_healthy = vector_store.status.is_healthy();
        let graph_healthy = graph_store.status.is_healthy();
        let overall_status = if vector_healthy && graph_healthy {
            OverallStatus::FullyOperational
        } else if !vector_healthy && !graph_healthy {
            OverallStatus::Unavailable
        } else {
            OverallStatus::PartiallyOperational
        };

        IntegrationHealth {
            overall_status,
            vector_store,
            graph_store,
            circuit_breaker: self.breaker.get_state().await,
            cache: self.cache.stats().await,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl std::fmt::Debug for HealthMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthMonitor")
            .field("vector_store", &self.vector_store.provider_name())
            .field(
                "graph_store",
                &self.graph_store.as_ref().map(|g| g.provider_name()),
            )
            .finish()
    }
}
