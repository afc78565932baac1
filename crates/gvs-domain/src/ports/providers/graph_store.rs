use crate::error::Result;
use crate::queries;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// One record returned by a graph query
///
/// A thin wrapper over the field map a graph record exposes, with typed
/// accessors for the scalar shapes the validator interprets.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRecord {
    fields: HashMap<String, Value>,
}

impl GraphRecord {
    /// Create a record from its field map
    pub fn new(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Raw field access
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Read a field as a boolean
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.fields.get(field).and_then(Value::as_bool)
    }

    /// Read a field as an integer
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.fields.get(field).and_then(Value::as_i64)
    }

    /// Read a field as a string slice
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

/// Scoped Graph Query Session
///
/// Sessions are acquired from a [`GraphStoreProvider`], used for one or more
/// `run` calls, and must be closed on every exit path, success or failure.
///
/// # Example
///
/// ```ignore
/// use gvs_domain::{ports::providers::GraphSession, queries};
///
/// let mut session = provider.session().await?;
/// let records = session
///     .run(queries::REPOSITORY_EXISTS, params)
///     .await?;
/// session.close().await?;
/// ```
#[async_trait]
pub trait GraphSession: Send {
    /// Execute one statement with the given parameters
    ///
    /// # Arguments
    /// * `statement` - A statement from [`crate::queries`]
    /// * `params` - Named parameters referenced by the statement
    ///
    /// # Returns
    /// Ok(records) produced by the statement, Error if execution failed
    async fn run(
        &mut self,
        statement: &str,
        params: HashMap<String, Value>,
    ) -> Result<Vec<GraphRecord>>;

    /// Release the session
    async fn close(&mut self) -> Result<()>;
}

/// Code Knowledge Graph Interface
///
/// Defines the contract for graph stores holding the indexed code structure
/// (repositories, classes, methods, functions). This layer only issues
/// existence/structure statements and interprets boolean results; it never
/// mutates the graph.
#[async_trait]
pub trait GraphStoreProvider: Send + Sync {
    /// Acquire a new query session
    async fn session(&self) -> Result<Box<dyn GraphSession>>;

    /// Get the name/identifier of this graph store provider
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation)
    ///
    /// Opens a session, runs a liveness ping, and closes the session on
    /// both the success and failure paths.
    async fn health_check(&self) -> Result<()> {
        let mut session = self.session().await?;
        let outcome = session.run(queries::HEALTH_PING, HashMap::new()).await;
        let closed = session.close().await;
        outcome?;
        closed
    }
}
