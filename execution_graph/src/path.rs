// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data and control paths, and the per-scope registry that hands them out.
//!
//! Both path kinds hold a write-once slot, implemented as an option cell (`OnceLock`) protected
//! against second assignment — the alternative, last-writer-wins, was rejected because it hides
//! graph-model bugs rather than surfacing them as [`GraphError::DoubleBindError`].

use futures::future::BoxFuture;
use graph_model::EdgeId;
use graph_value::{FromValue, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::{GraphError, NodeEvalError};
use crate::scope::Scope;

/// A data path's producer closure: a pure pull with no arguments.
pub type Producer = Arc<dyn Fn() -> Result<Value, NodeEvalError> + Send + Sync>;

/// A control path's body: given the owning scope (so it can reach other paths), runs to
/// completion, possibly suspending.
pub type ControlBody =
    Arc<dyn Fn(Arc<Scope>) -> BoxFuture<'static, Result<(), NodeEvalError>> + Send + Sync>;

/// A lazy, pull-based value producer bound to one closure.
///
/// Each [`DataPath::get`] re-invokes the bound producer: there is no memoization across pulls.
/// Two reads at different times may observe different values if an upstream side effect has
/// intervened between them; a producer that wants caching implements it itself.
pub struct DataPath {
    id: EdgeId,
    producer: OnceLock<Producer>,
}

impl DataPath {
    /// Creates an unbound data path for the given edge id.
    #[must_use]
    pub fn new(id: EdgeId) -> Self {
        Self {
            id,
            producer: OnceLock::new(),
        }
    }

    /// This path's edge id.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Binds `producer` as this path's value source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DoubleBindError`] if a producer is already bound.
    pub fn bind(&self, producer: Producer) -> Result<(), GraphError> {
        self.producer
            .set(producer)
            .map_err(|_| GraphError::DoubleBindError(self.id))
    }

    /// Invokes the bound producer and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnboundPathError`] if no producer is bound, or
    /// [`GraphError::NodeEvalError`] if the producer itself fails.
    pub fn get(&self) -> Result<Value, GraphError> {
        let producer = self
            .producer
            .get()
            .ok_or(GraphError::UnboundPathError(self.id))?;
        producer().map_err(GraphError::from)
    }

    /// Pulls this path's value and narrows it to `T`.
    ///
    /// # Errors
    ///
    /// As [`DataPath::get`], plus [`GraphError::TypeMismatchError`] if the pulled value is not a
    /// `T`.
    pub fn get_of_type<T: FromValue>(&self) -> Result<T, GraphError> {
        let value = self.get()?;
        let got = value.kind_name();
        T::from_value(&value).ok_or(GraphError::TypeMismatchError {
            expected: T::KIND,
            got,
        })
    }
}

impl fmt::Debug for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataPath")
            .field("id", &self.id)
            .field("bound", &self.producer.get().is_some())
            .finish()
    }
}

/// A declarable, invokable side-effect closure bound to one body.
///
/// Invoking a path with no declared body is a no-op: this corresponds to dangling control
/// outputs such as `outDefault` on a total branch, where the graph author simply left a port
/// unwired.
pub struct ControlPath {
    id: EdgeId,
    body: OnceLock<ControlBody>,
}

impl ControlPath {
    /// Creates an undeclared control path for the given edge id.
    #[must_use]
    pub fn new(id: EdgeId) -> Self {
        Self {
            id,
            body: OnceLock::new(),
        }
    }

    /// This path's edge id.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Reports whether a body has been declared on this path.
    #[must_use]
    pub fn is_declared(&self) -> bool {
        self.body.get().is_some()
    }

    /// Declares `body` as this path's side effect.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DoubleBindError`] if a body is already declared.
    pub fn declare(&self, body: ControlBody) -> Result<(), GraphError> {
        self.body
            .set(body)
            .map_err(|_| GraphError::DoubleBindError(self.id))
    }

    /// Runs the declared body, if any, to completion.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeEvalError`] if the body fails.
    pub async fn invoke(&self, scope: Arc<Scope>) -> Result<(), GraphError> {
        match self.body.get() {
            Some(body) => body(scope).await.map_err(GraphError::from),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for ControlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlPath")
            .field("id", &self.id)
            .field("declared", &self.body.get().is_some())
            .finish()
    }
}

/// Per-scope mapping from edge id to its path object.
///
/// Populated lazily on first query so the same id yields the same path object each time within
/// one scope. Not shared across runs: every [`Scope`] owns its own registry.
#[derive(Debug, Default)]
pub struct PathRegistry {
    data: Mutex<HashMap<EdgeId, Arc<DataPath>>>,
    control: Mutex<HashMap<EdgeId, Arc<ControlPath>>>,
}

impl PathRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the data path for `id`, creating it on first access.
    #[must_use]
    pub fn data_path(&self, id: EdgeId) -> Arc<DataPath> {
        let mut data = self.data.lock().expect("path registry mutex poisoned");
        Arc::clone(data.entry(id).or_insert_with(|| Arc::new(DataPath::new(id))))
    }

    /// Returns the control path for `id`, creating it on first access.
    #[must_use]
    pub fn control_path(&self, id: EdgeId) -> Arc<ControlPath> {
        let mut control = self.control.lock().expect("path registry mutex poisoned");
        Arc::clone(
            control
                .entry(id)
                .or_insert_with(|| Arc::new(ControlPath::new(id))),
        )
    }

    /// Returns every data path materialized so far.
    #[must_use]
    pub fn data_paths(&self) -> Vec<Arc<DataPath>> {
        self.data
            .lock()
            .expect("path registry mutex poisoned")
            .values()
            .cloned()
            .collect()
    }

    /// Returns every control path materialized so far.
    #[must_use]
    pub fn control_paths(&self) -> Vec<Arc<ControlPath>> {
        self.control
            .lock()
            .expect("path registry mutex poisoned")
            .values()
            .cloned()
            .collect()
    }
}
