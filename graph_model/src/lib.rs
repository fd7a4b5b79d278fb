// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable graph document model.
//!
//! A [`Graph`] is a named, parsed document: a list of [`Node`]s, each polymorphic over a closed
//! set of [`NodeKind`]s, referencing edges by [`EdgeId`]. Nothing in here executes anything —
//! that is `execution_graph`'s job, working against the [`Node::kind`] tag. Parsing/validation of
//! a document into this shape is a collaborator concern; this crate assumes the document is
//! already well-formed enough that every edge id a node port names is meaningful.

use graph_value::Value;
use std::fmt;

/// An opaque integer identifying one path (control or data) within a single graph.
///
/// Uniqueness is a property of the source document, not enforced here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node's position within its owning [`Graph`]'s node list.
///
/// Stable for the lifetime of the graph, distinct from [`EdgeId`] — a node has one id, but may
/// own several edge ids across its ports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// A supported arithmetic operator for a [`NodeKind::Math`] node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MathOp {
    /// `a + b`.
    Add,
    /// `a - b`.
    Sub,
    /// `a * b`.
    Mul,
    /// `a / b`.
    Div,
}

impl fmt::Display for MathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
        };
        write!(f, "{s}")
    }
}

/// The closed set of node kinds the core understands.
///
/// This is the "tagged variant, not subclassing" design from the polymorphic-node note: adding a
/// new kind of node means adding a variant here and a matching executor in `node_registry`, never
/// adding a new Rust type that the scope has to know about directly.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// No inputs, one outgoing control id. A graph entry point.
    Entry {
        /// Outgoing control edge invoked when the scope launches this entry.
        out: EdgeId,
    },
    /// One incoming control id, one data input, a key→control-id table, and a default.
    Branch {
        /// Incoming control edge.
        in_: EdgeId,
        /// Data input pulled to obtain the branch key.
        in_value: EdgeId,
        /// Key-to-outgoing-control-id table. Keys are compared by value equality.
        cases: Vec<(Value, EdgeId)>,
        /// Outgoing control edge invoked when no case matches.
        out_default: EdgeId,
    },
    /// One data input, a key→data-source-id table, a default data source, one data output.
    Select {
        /// Data input pulled to obtain the selection key.
        in_: EdgeId,
        /// Key-to-data-source-id table. Keys are compared by value equality.
        cases: Vec<(Value, EdgeId)>,
        /// Data source pulled when no case matches.
        in_default: EdgeId,
        /// Outgoing data edge this node installs a producer on.
        out: EdgeId,
    },
    /// A map-typed data input, a key data input, a map-typed data output.
    MapRemove {
        /// The map to read from.
        in_: EdgeId,
        /// The key to remove.
        in_key: EdgeId,
        /// The resulting map, with `in_key` absent.
        out: EdgeId,
    },
    /// Two numeric data inputs, one numeric data output, numeric widening rules apply.
    Math {
        /// Which operator to apply.
        op: MathOp,
        /// First operand.
        in_a: EdgeId,
        /// Second operand.
        in_b: EdgeId,
        /// Result, of the widened numeric class.
        out: EdgeId,
    },
    /// Zero inputs, one data output carrying a fixed literal.
    Const {
        /// The literal value this node always produces.
        value: Value,
        /// Outgoing data edge.
        out: EdgeId,
    },
    /// Control passthrough with a side effect: records an optional data input, then forwards.
    Log {
        /// Incoming control edge.
        in_: EdgeId,
        /// Optional data input pulled and recorded before forwarding.
        in_value: Option<EdgeId>,
        /// Outgoing control edge invoked after recording.
        out: EdgeId,
    },
}

impl NodeKind {
    /// Returns the kind's name, used in diagnostics such as `NoExecutorError`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry { .. } => "Entry",
            Self::Branch { .. } => "Branch",
            Self::Select { .. } => "Select",
            Self::MapRemove { .. } => "Map.Remove",
            Self::Math { .. } => "Math",
            Self::Const { .. } => "Const",
            Self::Log { .. } => "Log",
        }
    }
}

/// A single node in a [`Graph`]: its position and its kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
}

impl Node {
    /// Creates a node at the given position with the given kind.
    #[must_use]
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self { id, kind }
    }

    /// This node's position within its owning graph.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// This node's kind.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }
}

/// A named, immutable dataflow document.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    name: String,
    nodes: Vec<Node>,
}

impl Graph {
    /// Creates a graph from a name and a node list.
    ///
    /// Assigns each node's [`NodeId`] from its position in `nodes`, overwriting whatever id it
    /// was constructed with — callers build nodes with a placeholder id and let the graph fix it
    /// up, the same way a document parser would.
    #[must_use]
    pub fn new(name: impl Into<String>, nodes: Vec<NodeKind>) -> Self {
        let nodes = nodes
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Node::new(NodeId(i), kind))
            .collect();
        Self {
            name: name.into(),
            nodes,
        }
    }

    /// The graph's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enumerates this graph's nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}
