// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The core's error taxonomy.

use graph_model::EdgeId;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A failure raised from within a data path's producer or a control path's body.
///
/// Wraps the node kind that raised it and the underlying cause. `cause` is `Arc` rather than
/// `Box` so a `NodeEvalError` can be cloned into `GraphError` without forcing every caller along
/// the propagation chain to consume it.
#[derive(Clone)]
pub struct NodeEvalError {
    node_kind: &'static str,
    cause: Arc<dyn StdError + Send + Sync>,
}

impl NodeEvalError {
    /// Wraps `cause` as having been raised while evaluating a node of kind `node_kind`.
    pub fn new(node_kind: &'static str, cause: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            node_kind,
            cause: Arc::new(cause),
        }
    }

    /// The kind of node that raised this error.
    #[must_use]
    pub fn node_kind(&self) -> &'static str {
        self.node_kind
    }
}

impl fmt::Debug for NodeEvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeEvalError")
            .field("node_kind", &self.node_kind)
            .field("cause", &self.cause.to_string())
            .finish()
    }
}

impl fmt::Display for NodeEvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {} failed: {}", self.node_kind, self.cause)
    }
}

impl StdError for NodeEvalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

/// Errors surfaced by the core.
#[derive(Clone, Debug)]
pub enum GraphError {
    /// A graph name or scope id was unknown to the catalog/service collaborator.
    NotFound,
    /// Binding found no executor for a reachable node of this kind.
    NoExecutorError(&'static str),
    /// A path received a second producer/body (a graph-model bug).
    DoubleBindError(EdgeId),
    /// A data path was pulled with no producer bound (a reachability bug).
    UnboundPathError(EdgeId),
    /// An `Entry` node's outgoing control edge has no node declaring a body on it.
    ///
    /// Caught at bind time, not at invoke time: a dangling `outDefault` or other unconsumed
    /// control output is legitimate (invoking it is a no-op), but an entry's own control output is
    /// the one control path the scope unconditionally invokes at [`crate::Scope::run`] time, so
    /// leaving it undeclared is always a malformed graph, never a valid dangling wire.
    UndeclaredEntryError(EdgeId),
    /// A `get_of_type` narrowing, or a numeric node, saw an incompatible value.
    TypeMismatchError {
        /// The kind name that was expected.
        expected: &'static str,
        /// The kind name that was actually observed.
        got: &'static str,
    },
    /// A producer or body raised a failure during evaluation.
    NodeEvalError(NodeEvalError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::NoExecutorError(kind) => write!(f, "no executor registered for node kind {kind}"),
            Self::DoubleBindError(id) => write!(f, "path {id} already bound"),
            Self::UnboundPathError(id) => write!(f, "path {id} pulled with no producer bound"),
            Self::UndeclaredEntryError(id) => {
                write!(f, "entry control path {id} has no declared body")
            }
            Self::TypeMismatchError { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NodeEvalError(e) => write!(f, "{e}"),
        }
    }
}

impl StdError for GraphError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::NodeEvalError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NodeEvalError> for GraphError {
    fn from(e: NodeEvalError) -> Self {
        Self::NodeEvalError(e)
    }
}

impl GraphError {
    /// Collapses any [`GraphError`] into a [`NodeEvalError`] attributed to `node_kind`.
    ///
    /// A [`GraphError::NodeEvalError`] is unwrapped as-is; every other variant (a structural
    /// binding bug surfacing at invoke time, such as a path that was never bound) is wrapped so a
    /// task body can report a single error type regardless of where the failure originated.
    #[must_use]
    pub fn into_node_eval_error(self, node_kind: &'static str) -> NodeEvalError {
        match self {
            Self::NodeEvalError(e) => e,
            other => NodeEvalError::new(node_kind, GraphErrorCause(other)),
        }
    }
}

/// Adapts a non-[`NodeEvalError`] [`GraphError`] into a [`std::error::Error`] cause.
#[derive(Debug)]
struct GraphErrorCause(GraphError);

impl fmt::Display for GraphErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for GraphErrorCause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}
