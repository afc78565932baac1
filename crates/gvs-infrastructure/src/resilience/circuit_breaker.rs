//! Three-state circuit breaker
//!
//! Failure-isolation wrapper around an arbitrary asynchronous operation.
//! One breaker instance typically guards one external dependency (e.g. the
//! graph store).
//!
//! ## State machine
//!
//! - `closed`: calls pass through; a success resets the failure count, the
//!   threshold-th consecutive failure opens the breaker
//! - `open`: calls fail immediately with [`gvs_domain::Error::CircuitOpen`]
//!   without invoking the operation or touching the counters; the timeout
//!   is checked lazily on the next call attempt
//! - `half_open`: exactly one trial call is allowed through; success closes
//!   the breaker, failure re-opens it and restarts the timeout clock

use crate::constants::{CIRCUIT_BREAKER_FAILURE_THRESHOLD, CIRCUIT_BREAKER_TIMEOUT_SECS};
use chrono::{DateTime, Utc};
use gvs_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Circuit breaker states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitState {
    /// Calls pass through
    Closed,
    /// Calls fail immediately
    Open,
    /// One trial call is allowed through
    HalfOpen,
}

/// Observability snapshot of a breaker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitBreakerSnapshot {
    /// Current state
    pub state: CircuitState,
    /// Consecutive failures observed in the closed state
    pub failure_count: u32,
    /// Failures needed to open the breaker
    pub failure_threshold: u32,
    /// When the last failure was recorded
    pub last_failure_time: Option<DateTime<Utc>>,
}

/// Mutable breaker state guarded by one lock
struct BreakerInner {
    state: CircuitState,
    failure_count: u32,
    opened_at: Option<Instant>,
    last_failure_time: Option<DateTime<Utc>>,
    trial_in_flight: bool,
}

/// Three-state failure-isolation wrapper for async operations
///
/// # Example
///
/// ```ignore
/// use gvs_infrastructure::resilience::CircuitBreaker;
///
/// let breaker = CircuitBreaker::new("graph_store");
/// let records = breaker.call(|| session.run(statement, params)).await?;
/// ```
pub struct CircuitBreaker {
    name: String,
    failure_threshold: u32,
    timeout: Duration,
    inner: Mutex<BreakerInner>,
}

impl CircuitBreaker {
    /// Create a breaker with default threshold and timeout
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_config(
            name,
            CIRCUIT_BREAKER_FAILURE_THRESHOLD,
            Duration::from_secs(CIRCUIT_BREAKER_TIMEOUT_SECS),
        )
    }

    /// Create a breaker with explicit threshold and open-state timeout
    pub fn with_config<S: Into<String>>(name: S, failure_threshold: u32, timeout: Duration) -> Self {
        Self {
            name: name.into(),
            failure_threshold: failure_threshold.max(1),
            timeout,
            inner: Mutex::new(BreakerInner {
                state: CircuitState::Closed,
                failure_count: 0,
                opened_at: None,
                last_failure_time: None,
                trial_in_flight: false,
            }),
        }
    }

    /// Name of the dependency this breaker guards
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run an operation through the breaker
    ///
    /// Fails fast with [`Error::CircuitOpen`] while the breaker is open and
    /// the timeout has not elapsed; the wrapped operation is not invoked and
    /// no failure statistics are mutated.
    pub async fn call<T, F, Fut>(&self, op: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.admit().await?;

        let result = op().await;

        let mut inner = self.inner.lock().await;
        match &result {
            Ok(_) => self.record_success(&mut inner),
            Err(_) => self.record_failure(&mut inner),
        }
        result
    }

    /// Get an observability snapshot
    pub async fn get_state(&self) -> CircuitBreakerSnapshot {
        let inner = self.inner.lock().await;
        CircuitBreakerSnapshot {
            state: inner.state,
            failure_count: inner.failure_count,
            failure_threshold: self.failure_threshold,
            last_failure_time: inner.last_failure_time,
        }
    }

    /// Decide whether a call may proceed, transitioning open → half-open
    /// when the timeout has elapsed
    async fn admit(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        match inner.state {
            CircuitState::Closed => Ok(()),
            CircuitState::Open => {
                let timeout_elapsed = inner
                    .opened_at
                    .map(|at| at.elapsed() >= self.timeout)
                    .unwrap_or(true);
                if timeout_elapsed {
                    debug!(breaker = %self.name, "Circuit breaker half-open, allowing trial call");
                    inner.state = CircuitState::HalfOpen;
                    inner.trial_in_flight = true;
                    Ok(())
                } else {
                    Err(Error::circuit_open(&self.name))
                }
            }
            CircuitState::HalfOpen => {
                // Only one trial call at a time
                if inner.trial_in_flight {
                    Err(Error::circuit_open(&self.name))
                } else {
                    inner.trial_in_flight = true;
                    Ok(())
                }
            }
        }
    }

    fn record_success(&self, inner: &mut BreakerInner) {
        if inner.state != CircuitState::Closed {
            debug!(breaker = %self.name, "Circuit breaker closed after successful call");
        }
        inner.state = CircuitState::Closed;
        inner.failure_count = 0;
        inner.opened_at = None;
        inner.trial_in_flight = false;
    }

    fn record_failure(&self, inner: &mut BreakerInner) {
        inner.last_failure_time = Some(Utc::now());
        match inner.state {
            CircuitState::HalfOpen => {
                warn!(breaker = %self.name, "Trial call failed, re-opening circuit breaker");
                inner.state = CircuitState::Open;
                inner.opened_at = Some(Instant::now());
                inner.trial_in_flight = false;
            }
            CircuitState::Closed => {
                inner.failure_count += 1;
                if inner.failure_count >= self.failure_threshold {
                    warn!(
                        breaker = %self.name,
                        failures = inner.failure_count,
                        "Failure threshold reached, opening circuit breaker"
                    );
                    inner.state = CircuitState::Open;
                    inner.opened_at = Some(Instant::now());
                }
            }
            CircuitState::Open => {
                // A call admitted before the breaker opened is finishing late
            }
        }
    }
}

impl std::fmt::Debug for CircuitBreaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircuitBreaker")
            .field("name", &self.name)
            .field("failure_threshold", &self.failure_threshold)
            .field("timeout", &self.timeout)
            .finish()
    }
}
