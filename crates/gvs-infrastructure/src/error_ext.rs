//! Error extension utilities
//!
//! Provides context extension methods for domain errors and
//! infrastructure-specific error conversion helpers.

use gvs_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use gvs_infrastructure::error_ext::ErrorContext;
///
/// // Add context to file operations
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read config file: {}", path.display()))?;
///
/// // Add context with lazy evaluation
/// let result = operation()
///     .with_context(|| format!("Validation failed for result {}", expensive_id()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to our domain Error type
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context with lazy evaluation for expensive context creation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for graph store operations
    fn graph_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Infrastructure {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::Infrastructure {
            message: format!("{}: {}", f(), err),
            source: Some(Box::new(err)),
        })
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Io {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn graph_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::GraphDb {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }
}

/// Convert standard library errors to domain errors with context
pub fn to_domain_error<E>(error: E, context: &str) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::Infrastructure {
        message: format!("{}: {}", context, error),
        source: Some(Box::new(error)),
    }
}

/// Convert standard library errors to domain results with context
pub fn to_domain_result<T, E>(result: std::result::Result<T, E>, context: &str) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.map_err(|err| to_domain_error(err, context))
}
