//! Batch processor concurrency and isolation tests

use gvs_domain::error::Error;
use gvs_infrastructure::resilience::BatchProcessor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[tokio::test]
async fn results_preserve_input_order() {
    let processor = BatchProcessor::with_config(4, 3);
    let items: Vec<u32> = (0..10).collect();

    let results = processor
        .process_batch(items, |n| async move {
            // Later items finish first
            tokio::time::sleep(Duration::from_millis(u64::from(20 - n))).await;
            Ok(n * 2)
        })
        .await;

    let values: Vec<u32> = results.into_iter().map(|r| r.unwrap()).collect();
    assert_eq!(values, (0..10).map(|n| n * 2).collect::<Vec<_>>());
}

#[tokio::test]
async fn concurrency_never_exceeds_the_limit() {
    let max_concurrent = 3;
    let processor = BatchProcessor::with_config(max_concurrent, 20);

    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let in_flight_outer = Arc::clone(&in_flight);
    let peak_outer = Arc::clone(&peak);
    let results = processor
        .process_batch((0..30).collect::<Vec<u32>>(), move |n| {
            let in_flight = Arc::clone(&in_flight_outer);
            let peak = Arc::clone(&peak_outer);
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(n)
            }
        })
        .await;

    assert_eq!(results.len(), 30);
    assert!(results.iter().all(|r| r.is_ok()));
    assert!(peak.load(Ordering::SeqCst) <= max_concurrent);
}

#[tokio::test]
async fn one_failure_does_not_affect_the_other_slots() {
    let processor = BatchProcessor::with_config(4, 4);

    let results = processor
        .process_batch(vec![1u32, 2, 3, 4, 5], |n| async move {
            if n == 3 {
                Err(Error::validation("bad item"))
            } else {
                Ok(n)
            }
        })
        .await;

    assert_eq!(results.len(), 5);
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    assert!(matches!(results[2], Err(Error::Validation { .. })));
    assert!(results[3].is_ok());
    assert!(results[4].is_ok());
}

#[tokio::test]
async fn a_panicking_item_yields_an_error_slot() {
    let processor = BatchProcessor::with_config(2, 2);

    let results = processor
        .process_batch(vec![1u32, 2, 3], |n| async move {
            assert!(n != 2, "induced panic");
            Ok(n)
        })
        .await;

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
}

#[tokio::test]
async fn empty_input_yields_empty_output() {
    let processor = BatchProcessor::new();
    let results = processor
        .process_batch(Vec::<u32>::new(), |n| async move { Ok(n) })
        .await;
    assert!(results.is_empty());
}
