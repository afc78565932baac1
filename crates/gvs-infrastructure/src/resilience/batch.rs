//! Concurrency-bounded batch execution
//!
//! Fan-out executor for a list of items and an item-processing function.
//! Each output slot carries the item's own success or captured error, so
//! one failure never aborts or loses results for the rest of the batch.

use crate::constants::{BATCH_MAX_CONCURRENT, BATCH_SIZE};
use gvs_domain::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Concurrency-bounded fan-out executor
///
/// Items are submitted in chunks of `batch_size`; the actual concurrency
/// limit is the semaphore of `max_concurrent` permits, not the chunk size.
/// Output order corresponds to input order regardless of completion order.
///
/// # Example
///
/// ```ignore
/// use gvs_infrastructure::resilience::BatchProcessor;
///
/// let processor = BatchProcessor::new();
/// let outcomes = processor
///     .process_batch(results, move |result| validate(result))
///     .await;
/// ```
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    max_concurrent: usize,
    batch_size: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Create a processor with default concurrency and chunk size
    pub fn new() -> Self {
        Self::with_config(BATCH_MAX_CONCURRENT, BATCH_SIZE)
    }

    /// Create a processor with explicit concurrency and chunk size
    pub fn with_config(max_concurrent: usize, batch_size: usize) -> Self {
        Self {
            max_concurrent: max_concurrent.max(1),
            batch_size: batch_size.max(1),
        }
    }

    /// Maximum number of in-flight item invocations
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Run `f` over every item, bounded by the semaphore
    ///
    /// The output vector has exactly one slot per input item, in input
    /// order; a panicking or failing item yields an `Err` in its slot.
    pub async fn process_batch<T, R, F, Fut>(&self, items: Vec<T>, f: F) -> Vec<Result<R>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<R>> + Send + 'static,
    {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut results = Vec::with_capacity(items.len());
        let mut pending = items.into_iter();

        loop {
            let chunk: Vec<T> = pending.by_ref().take(self.batch_size).collect();
            if chunk.is_empty() {
                break;
            }

            let handles: Vec<_> = chunk
                .into_iter()
                .map(|item| {
                    let semaphore = Arc::clone(&semaphore);
                    let f = f.clone();
                    tokio::spawn(async move {
                        let _permit = semaphore
                            .acquire_owned()
                            .await
                            .map_err(|_| Error::internal("Batch semaphore closed"))?;
                        f(item).await
                    })
                })
                .collect();

            // Awaiting join handles in submission order keeps output order
            // aligned with input order
            for handle in handles {
                match handle.await {
                    Ok(result) => results.push(result),
                    Err(join_error) => results.push(Err(Error::internal(format!(
                        "Batch task aborted: {}",
                        join_error
                    )))),
                }
            }
        }

        results
    }
}
