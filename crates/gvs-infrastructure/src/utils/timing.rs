//! Operation timing and timeout helpers

use gvs_domain::error::{Error, Result};
use std::time::{Duration, Instant};
use tracing::debug;

/// Run a future with a deadline, mapping elapse to [`Error::Timeout`]
///
/// The error carries the operation name and the configured timeout so the
/// caller can log or surface it without extra bookkeeping.
///
/// # Example
///
/// ```ignore
/// use gvs_infrastructure::utils::with_timeout;
/// use std::time::Duration;
///
/// let results = with_timeout(
///     "vector_search",
///     Duration::from_secs(30),
///     provider.search_code_examples(query, count, None),
/// )
/// .await?;
/// ```
pub async fn with_timeout<T, F>(operation: &str, timeout: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(Error::timeout(operation, timeout.as_millis() as u64)),
    }
}

/// Wall-clock timer for a named operation
///
/// Mostly used to fill duration fields in response metadata; `finish`
/// additionally emits a debug-level trace with the elapsed time.
#[derive(Debug)]
pub struct TimedOperation {
    name: String,
    started_at: Instant,
}

impl TimedOperation {
    /// Start timing an operation
    pub fn start<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            started_at: Instant::now(),
        }
    }

    /// Operation name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elapsed time since start
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Elapsed time since start, in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Log the elapsed time and consume the timer
    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            operation = %self.name,
            elapsed_ms = elapsed.as_millis() as u64,
            "Operation completed"
        );
        elapsed
    }
}
