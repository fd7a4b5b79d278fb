// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component F: the scope, the heart of the core.

use futures::future::BoxFuture;
use graph_model::{EdgeId, Graph, NodeKind};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::GraphError;
use crate::executor::NodeExecutorSet;
use crate::host::RuntimeHost;
use crate::path::{ControlPath, DataPath, PathRegistry};

/// A scope's position in its lifecycle.
///
/// `Constructed` → `Bound` (every node initialized) → `Running` (entry bodies launched) →
/// `Stopped` (explicitly removed from the registry) → `Collected` (no tasks outstanding).
/// Represented as an explicit handle rather than left to finalization, per the design note that a
/// stopped scope still holds its task fibers until they settle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScopeState {
    /// The scope exists but nodes have not yet been bound.
    Constructed,
    /// Every node has been bound; entry bodies have not yet launched.
    Bound,
    /// Entry bodies have been launched onto the runtime host.
    Running,
    /// [`Scope::stop`] has been called; in-flight tasks may still be settling.
    Stopped,
    /// Every task launched by this scope has settled.
    Collected,
}

/// A per-run container owning paths, tasks, and lifetime for one execution of a [`Graph`].
///
/// The graph itself is shared, read-only, and outlives the scope; everything else — the path
/// registry, the node bindings it produced, and the scope's own lifecycle state — is owned
/// exclusively by this scope and never shared with another run of the same graph.
pub struct Scope {
    id: Uuid,
    graph: Arc<Graph>,
    paths: PathRegistry,
    host: Arc<dyn RuntimeHost>,
    state: Mutex<ScopeState>,
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("id", &self.id)
            .field("graph", &self.graph.name())
            .field("state", &self.state.lock().expect("scope state mutex poisoned"))
            .finish_non_exhaustive()
    }
}

impl Scope {
    /// Constructs and binds a scope over `graph`.
    ///
    /// Assigns a fresh scope id, allocates an empty path registry, then invokes the first
    /// matching executor from `executors` for every node in document order. The executor uses
    /// [`Scope::data_path`]/[`Scope::control_path`] to materialize paths on demand and installs
    /// producers/bodies on them.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoExecutorError`] if some node's kind matched no executor,
    /// [`GraphError::UndeclaredEntryError`] if some `Entry` node's outgoing control path was never
    /// declared by a consumer, or whatever error the matching executor's own setup raised (most
    /// commonly [`GraphError::DoubleBindError`] for a malformed graph that wires the same edge
    /// twice).
    #[instrument(skip(graph, executors, host), fields(graph = %graph.name()))]
    pub fn bind(
        graph: Arc<Graph>,
        executors: &NodeExecutorSet,
        host: Arc<dyn RuntimeHost>,
    ) -> Result<Arc<Self>, GraphError> {
        let scope = Arc::new(Self {
            id: Uuid::new_v4(),
            graph,
            paths: PathRegistry::new(),
            host,
            state: Mutex::new(ScopeState::Constructed),
        });

        for node in scope.graph.nodes() {
            let mut handled = false;
            for executor in executors.iter() {
                if executor.bind(&scope, node)? {
                    handled = true;
                    break;
                }
            }
            if !handled {
                return Err(GraphError::NoExecutorError(node.kind().name()));
            }
        }

        for node in scope.graph.nodes() {
            if let NodeKind::Entry { out } = node.kind() {
                if !scope.control_path(*out).is_declared() {
                    return Err(GraphError::UndeclaredEntryError(*out));
                }
            }
        }

        *scope.state.lock().expect("scope state mutex poisoned") = ScopeState::Bound;
        info!(scope_id = %scope.id, "scope bound");
        Ok(scope)
    }

    /// This scope's universally unique id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// This scope's current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ScopeState {
        *self.state.lock().expect("scope state mutex poisoned")
    }

    /// The graph this scope runs.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the data path for `id`, creating it on first access.
    #[must_use]
    pub fn data_path(&self, id: EdgeId) -> Arc<DataPath> {
        self.paths.data_path(id)
    }

    /// Returns the control path for `id`, creating it on first access.
    #[must_use]
    pub fn control_path(&self, id: EdgeId) -> Arc<ControlPath> {
        self.paths.control_path(id)
    }

    /// Launches every `Entry` node's outgoing control path as an independent task.
    ///
    /// Entry tasks are mutually independent; no ordering between them is guaranteed. Must be
    /// called on an already-bound scope; calling it twice launches entries twice.
    #[instrument(skip(scope), fields(scope_id = %scope.id))]
    pub fn run(scope: &Arc<Self>) {
        *scope.state.lock().expect("scope state mutex poisoned") = ScopeState::Running;

        for node in scope.graph.nodes() {
            if let NodeKind::Entry { out } = node.kind() {
                let entry = Arc::clone(scope);
                let control = scope.control_path(*out);
                let body: BoxFuture<'static, _> = Box::pin(async move {
                    control
                        .invoke(Arc::clone(&entry))
                        .await
                        .map_err(|e| e.into_node_eval_error("Entry"))
                });
                scope.host.launch(body);
            }
        }

        info!(scope_id = %scope.id, "scope running");
    }

    /// Raises the host's cooperative stop flag and marks the scope stopped.
    ///
    /// Removing the scope from whatever external table keyed it by scope id is the caller's
    /// responsibility (that table is a collaborator concern, not owned by the scope). Already
    /// running tasks continue until they naturally finish; this is best-effort cancellation by
    /// design, never a forced interrupt.
    pub fn stop(&self) {
        self.host.stop();
        *self.state.lock().expect("scope state mutex poisoned") = ScopeState::Stopped;
        info!(scope_id = %self.id, "scope stopped");
    }

    /// Returns whether [`Scope::stop`] has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.host.is_stopped()
    }

    /// Awaits every task this scope has launched reaching quiescence, then marks the scope
    /// collected.
    ///
    /// # Errors
    ///
    /// Returns the first task failure observed, if any. Later task failures do not override it
    /// and do not prevent the remaining tasks from being awaited.
    pub async fn join(&self) -> Result<(), GraphError> {
        let result = self.host.join().await;
        *self.state.lock().expect("scope state mutex poisoned") = ScopeState::Collected;
        result.map_err(GraphError::from)
    }
}

#[cfg(test)]
impl Scope {
    /// Builds a scope with no nodes and a no-op host, for unit tests that only need a path
    /// registry and something to satisfy `ControlPath::invoke`'s `Arc<Scope>` argument.
    pub(crate) fn for_test(paths: PathRegistry) -> Arc<Self> {
        use crate::error::NodeEvalError;

        #[derive(Debug)]
        struct NoopHost;

        impl RuntimeHost for NoopHost {
            fn launch(&self, _body: BoxFuture<'static, Result<(), NodeEvalError>>) {}

            fn stop(&self) {}

            fn is_stopped(&self) -> bool {
                false
            }

            fn join(&self) -> BoxFuture<'_, Result<(), NodeEvalError>> {
                Box::pin(async { Ok(()) })
            }
        }

        Arc::new(Self {
            id: Uuid::new_v4(),
            graph: Arc::new(Graph::new("test", vec![])),
            paths,
            host: Arc::new(NoopHost),
            state: Mutex::new(ScopeState::Constructed),
        })
    }
}
