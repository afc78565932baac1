//! Circuit breaker state machine tests

use gvs_domain::error::{Error, Result};
use gvs_infrastructure::resilience::{CircuitBreaker, CircuitState};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

async fn fail(breaker: &CircuitBreaker) -> Result<()> {
    breaker
        .call(|| async { Err::<(), _>(Error::graph_db("connection refused")) })
        .await
}

async fn succeed(breaker: &CircuitBreaker) -> Result<()> {
    breaker.call(|| async { Ok(()) }).await
}

#[tokio::test]
async fn breaker_opens_at_failure_threshold() {
    let breaker = CircuitBreaker::with_config("graph", 3, Duration::from_secs(60));

    for _ in 0..2 {
        assert!(fail(&breaker).await.is_err());
        assert_eq!(breaker.get_state().await.state, CircuitState::Closed);
    }

    assert!(fail(&breaker).await.is_err());
    let snapshot = breaker.get_state().await;
    assert_eq!(snapshot.state, CircuitState::Open);
    assert_eq!(snapshot.failure_count, 3);
    assert!(snapshot.last_failure_time.is_some());
}

#[tokio::test]
async fn success_resets_the_failure_count() {
    let breaker = CircuitBreaker::with_config("graph", 3, Duration::from_secs(60));

    assert!(fail(&breaker).await.is_err());
    assert!(fail(&breaker).await.is_err());
    assert!(succeed(&breaker).await.is_ok());
    assert_eq!(breaker.get_state().await.failure_count, 0);

    // Two more failures are not enough to reach the threshold again
    assert!(fail(&breaker).await.is_err());
    assert!(fail(&breaker).await.is_err());
    assert_eq!(breaker.get_state().await.state, CircuitState::Closed);
}

#[tokio::test]
async fn open_breaker_fails_fast_without_invoking_the_operation() {
    let breaker = CircuitBreaker::with_config("graph", 1, Duration::from_secs(60));
    assert!(fail(&breaker).await.is_err());

    let invoked = Arc::new(AtomicUsize::new(0));
    let invoked_clone = Arc::clone(&invoked);
    let result = breaker
        .call(move || async move {
            invoked_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;

    assert!(matches!(result, Err(Error::CircuitOpen { .. })));
    assert_eq!(invoked.load(Ordering::SeqCst), 0);
    // Rejected calls do not move the failure statistics
    assert_eq!(breaker.get_state().await.failure_count, 1);
}

#[tokio::test]
async fn trial_success_after_timeout_closes_the_breaker() {
    let breaker = CircuitBreaker::with_config("graph", 1, Duration::from_millis(20));
    assert!(fail(&breaker).await.is_err());
    assert_eq!(breaker.get_state().await.state, CircuitState::Open);

    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(succeed(&breaker).await.is_ok());
    let snapshot = breaker.get_state().await;
    assert_eq!(snapshot.state, CircuitState::Closed);
    assert_eq!(snapshot.failure_count, 0);
}

#[tokio::test]
async fn trial_failure_reopens_the_breaker() {
    let breaker = CircuitBreaker::with_config("graph", 1, Duration::from_millis(20));
    assert!(fail(&breaker).await.is_err());

    tokio::time::sleep(Duration::from_millis(50)).await;

    // Trial call fails: straight back to open, timeout clock restarted
    assert!(fail(&breaker).await.is_err());
    assert_eq!(breaker.get_state().await.state, CircuitState::Open);

    // Before the restarted timeout elapses, calls still fail fast
    let result = succeed(&breaker).await;
    assert!(matches!(result, Err(Error::CircuitOpen { .. })));
}

#[tokio::test]
async fn half_open_admits_only_one_trial_call() {
    let breaker = Arc::new(CircuitBreaker::with_config(
        "graph",
        1,
        Duration::from_millis(20),
    ));
    assert!(fail(&breaker).await.is_err());
    tokio::time::sleep(Duration::from_millis(50)).await;

    let gate = Arc::new(tokio::sync::Notify::new());

    // First trial call parks inside the operation while holding the slot
    let trial_breaker = Arc::clone(&breaker);
    let trial_gate = Arc::clone(&gate);
    let trial = tokio::spawn(async move {
        trial_breaker
            .call(move || async move {
                trial_gate.notified().await;
                Ok(())
            })
            .await
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(breaker.get_state().await.state, CircuitState::HalfOpen);

    // A second call during the trial is rejected
    let second = succeed(&breaker).await;
    assert!(matches!(second, Err(Error::CircuitOpen { .. })));

    gate.notify_one();
    assert!(trial.await.unwrap().is_ok());
    assert_eq!(breaker.get_state().await.state, CircuitState::Closed);
}

#[tokio::test]
async fn circuit_open_error_names_the_breaker() {
    let breaker = CircuitBreaker::with_config("graph_store", 1, Duration::from_secs(60));
    assert!(fail(&breaker).await.is_err());

    let err = succeed(&breaker).await.unwrap_err();
    assert!(err.is_circuit_open());
    assert!(err.to_string().contains("graph_store"));
}
