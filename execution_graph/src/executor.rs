// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component E: the node implementation registry's executor seam.
//!
//! This crate only defines the contract; the builtin executors (`Entry`, `Branch`, `Select`,
//! `Map.Remove`, `Math`, `Const`, `Log`) live in `node_registry`, which depends on this crate
//! rather than the other way around.

use crate::error::GraphError;
use crate::scope::Scope;
use graph_model::Node;
use std::sync::Arc;

/// A binding for one node kind.
///
/// Called once per node during scope binding. An executor inspects the node, asks the scope for
/// its input/output paths, and installs producers/bodies on them.
pub trait NodeExecutor: Send + Sync {
    /// Attempts to bind `node`. Returns `Ok(true)` if this executor handled it, `Ok(false)` if
    /// the node's kind did not match (so the scope should try the next executor).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DoubleBindError`] if the node's ports were already bound by an
    /// earlier executor (a graph-model bug), or any error a specific executor's setup raises.
    fn bind(&self, scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError>;
}

/// An ordered, read-only set of node executors, tried in discovery order.
pub type NodeExecutorSet = Arc<[Arc<dyn NodeExecutor>]>;
