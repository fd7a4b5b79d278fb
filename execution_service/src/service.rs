// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `GraphService` collaborator: the process-facing boundary that looks a graph name up in a
//! [`GraphCatalog`], binds and runs a fresh [`Scope`] over it, and tracks running scopes by id.

use crate::catalog::GraphCatalog;
use execution_graph::{GraphError, NodeExecutorSet, RuntimeHost, Scope};
use execution_host::TokioRuntimeHost;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::instrument;
use uuid::Uuid;

/// The set of scopes a [`GraphService`] implementation currently has running, keyed by scope id.
///
/// Exists as its own type so an implementation's locking strategy is visible at a glance rather
/// than buried in a struct field.
pub type ScopeTable = Mutex<HashMap<Uuid, Arc<Scope>>>;

/// Runs and supervises graphs looked up by name.
///
/// This is the outermost collaborator boundary: everything below it (`Scope`, `PathRegistry`,
/// `RuntimeHost`) is indifferent to how a caller discovered the graph name or what transport
/// carried the request in. A `GraphService` is the thing a transport layer (HTTP handler, RPC
/// dispatcher, CLI command) would hold one instance of.
pub trait GraphService: Send + Sync {
    /// Looks `name` up in the catalog, binds a fresh scope over it, launches its entries, and
    /// returns the new scope's id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if no graph is catalogued under `name`, or whatever error
    /// [`Scope::bind`] raised (most commonly [`GraphError::NoExecutorError`]).
    fn run_graph(&self, name: &str) -> Result<Uuid, GraphError>;

    /// Raises the cooperative stop flag on the scope identified by `scope_id` and deregisters it.
    ///
    /// Once this returns, `scope_id` is no longer tracked: a second call, or a lookup, reports
    /// [`GraphError::NotFound`], even though the scope's own tasks may still be settling.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `scope_id` names no scope this service is tracking.
    fn stop_graph(&self, scope_id: Uuid) -> Result<(), GraphError>;

    /// Returns a JSON summary of every graph the catalog currently holds: each graph's name and
    /// the ordered list of its node kinds.
    ///
    /// Intended for a diagnostics endpoint, not as the canonical document format — the catalog,
    /// not this method, is the source of truth for a graph's actual shape.
    fn get_spec(&self) -> serde_json::Value;
}

/// The production [`GraphService`]: a [`GraphCatalog`] of known graphs, the builtin (or
/// caller-supplied) executor set, and a table of scopes currently running, each on its own
/// freshly constructed [`TokioRuntimeHost`].
#[derive(Debug)]
pub struct DefaultGraphService {
    catalog: Arc<dyn GraphCatalog>,
    executors: NodeExecutorSet,
    scopes: ScopeTable,
}

impl DefaultGraphService {
    /// Creates a service over `catalog`, binding future scopes with `executors`.
    #[must_use]
    pub fn new(catalog: Arc<dyn GraphCatalog>, executors: NodeExecutorSet) -> Self {
        Self {
            catalog,
            executors,
            scopes: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the running scope identified by `scope_id`, if this service is tracking one.
    #[must_use]
    pub fn lookup_scope(&self, scope_id: Uuid) -> Option<Arc<Scope>> {
        self.scopes
            .lock()
            .expect("scope table mutex poisoned")
            .get(&scope_id)
            .cloned()
    }
}

impl GraphService for DefaultGraphService {
    #[instrument(skip(self), fields(graph = name))]
    fn run_graph(&self, name: &str) -> Result<Uuid, GraphError> {
        let graph = self.catalog.lookup_graph(name).ok_or(GraphError::NotFound)?;
        let host = Arc::new(TokioRuntimeHost::new());
        let scope = Scope::bind(graph, &self.executors, host as Arc<dyn RuntimeHost>)?;
        Scope::run(&scope);

        let scope_id = scope.id();
        self.scopes
            .lock()
            .expect("scope table mutex poisoned")
            .insert(scope_id, scope);
        Ok(scope_id)
    }

    fn stop_graph(&self, scope_id: Uuid) -> Result<(), GraphError> {
        let scope = self
            .scopes
            .lock()
            .expect("scope table mutex poisoned")
            .remove(&scope_id)
            .ok_or(GraphError::NotFound)?;
        scope.stop();
        Ok(())
    }

    fn get_spec(&self) -> serde_json::Value {
        let graphs: Vec<_> = self
            .catalog
            .list_graphs()
            .iter()
            .map(|g| {
                let kinds: Vec<_> = g.nodes().iter().map(|n| n.kind().name()).collect();
                serde_json::json!({ "name": g.name(), "nodes": kinds })
            })
            .collect();
        serde_json::json!({ "graphs": graphs })
    }
}
