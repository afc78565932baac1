//! In-memory graph store provider implementation
//!
//! A small code graph (repositories, classes, methods, functions) held in
//! concurrent sets. Sessions answer the fixed existence statements from
//! [`gvs_domain::queries`]; anything else is rejected. Supports failure
//! injection for resilience testing.

use async_trait::async_trait;
use dashmap::DashSet;
use gvs_domain::error::{Error, Result};
use gvs_domain::ports::{GraphRecord, GraphSession, GraphStoreProvider};
use gvs_domain::queries;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared graph content behind all sessions of one provider
struct GraphData {
    repositories: DashSet<String>,
    classes: DashSet<String>,
    methods: DashSet<(String, String)>,
    functions: DashSet<String>,
    /// Number of upcoming `run` calls that should fail
    fail_runs: AtomicUsize,
}

/// In-memory graph store provider
///
/// # Example
///
/// ```rust
/// use gvs_providers::graph_store::InMemoryGraphStoreProvider;
///
/// let graph = InMemoryGraphStoreProvider::new();
/// graph.add_repository("auth-service");
/// graph.add_class("AuthService");
/// graph.add_method("AuthService", "authenticate");
/// ```
pub struct InMemoryGraphStoreProvider {
    data: Arc<GraphData>,
}

impl InMemoryGraphStoreProvider {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            data: Arc::new(GraphData {
                repositories: DashSet::new(),
                classes: DashSet::new(),
                methods: DashSet::new(),
                functions: DashSet::new(),
                fail_runs: AtomicUsize::new(0),
            }),
        }
    }

    /// Register a repository node
    pub fn add_repository<S: Into<String>>(&self, name: S) {
        self.data.repositories.insert(name.into());
    }

    /// Register a class node (by simple or fully qualified name)
    pub fn add_class<S: Into<String>>(&self, name: S) {
        self.data.classes.insert(name.into());
    }

    /// Register a method on a class
    pub fn add_method<C: Into<String>, M: Into<String>>(&self, class_name: C, method_name: M) {
        self.data
            .methods
            .insert((class_name.into(), method_name.into()));
    }

    /// Register a standalone function node
    pub fn add_function<S: Into<String>>(&self, name: S) {
        self.data.functions.insert(name.into());
    }

    /// Make the next `count` query executions fail
    pub fn fail_next_runs(&self, count: usize) {
        self.data.fail_runs.store(count, Ordering::SeqCst);
    }
}

impl Default for InMemoryGraphStoreProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphStoreProvider for InMemoryGraphStoreProvider {
    async fn session(&self) -> Result<Box<dyn GraphSession>> {
        Ok(Box::new(InMemoryGraphSession {
            data: Arc::clone(&self.data),
        }))
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

/// Session over the shared in-memory graph
struct InMemoryGraphSession {
    data: Arc<GraphData>,
}

impl InMemoryGraphSession {
    fn param_str<'p>(params: &'p HashMap<String, Value>, key: &str) -> Result<&'p str> {
        params
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_argument(format!("Missing query parameter '{key}'")))
    }

    fn exists_record(exists: bool) -> Vec<GraphRecord> {
        vec![GraphRecord::new(HashMap::from([(
            queries::EXISTS_FIELD.to_string(),
            json!(exists),
        )]))]
    }

    fn method_exists(&self, method_name: &str, class_name: Option<&str>) -> bool {
        match class_name {
            Some(class_name) => self
                .data
                .methods
                .contains(&(class_name.to_string(), method_name.to_string())),
            None => self
                .data
                .methods
                .iter()
                .any(|entry| entry.1 == method_name),
        }
    }
}

#[async_trait]
impl GraphSession for InMemoryGraphSession {
    async fn run(
        &mut self,
        statement: &str,
        params: HashMap<String, Value>,
    ) -> Result<Vec<GraphRecord>> {
        let remaining = self.data.fail_runs.load(Ordering::SeqCst);
        if remaining > 0
            && self
                .data
                .fail_runs
                .compare_exchange(remaining, remaining - 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
        {
            return Err(Error::graph_db("Injected graph store failure"));
        }

        match statement {
            queries::REPOSITORY_EXISTS => {
                let name = Self::param_str(&params, "name")?;
                Ok(Self::exists_record(self.data.repositories.contains(name)))
            }
            queries::CLASS_EXISTS => {
                let name = Self::param_str(&params, "name")?;
                Ok(Self::exists_record(self.data.classes.contains(name)))
            }
            queries::METHOD_EXISTS_IN_CLASS => {
                let method_name = Self::param_str(&params, "method_name")?;
                let class_name = Self::param_str(&params, "class_name")?;
                Ok(Self::exists_record(
                    self.method_exists(method_name, Some(class_name)),
                ))
            }
            queries::METHOD_EXISTS => {
                let method_name = Self::param_str(&params, "method_name")?;
                Ok(Self::exists_record(self.method_exists(method_name, None)))
            }
            queries::FUNCTION_EXISTS => {
                let name = Self::param_str(&params, "name")?;
                Ok(Self::exists_record(self.data.functions.contains(name)))
            }
            queries::HEALTH_PING => Ok(vec![GraphRecord::new(HashMap::from([(
                "ok".to_string(),
                json!(1),
            )]))]),
            other => Err(Error::invalid_argument(format!(
                "Unsupported graph statement: {other}"
            ))),
        }
    }

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
