// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The graph execution engine: the scope that binds a graph's edges to runnable closures, the
//! lazy/pull semantics of data paths, the eager/push semantics of control paths, the concurrent
//! launch of entry points, and the lifecycle of a running scope.
//!
//! This crate is the core. It knows about [`graph_model`]'s node kinds only by tag (`NodeKind`
//! dispatch happens in `node_registry`'s executors, never here); it is agnostic to where those
//! executors come from and to which concrete [`RuntimeHost`] runs entry bodies.

mod error;
mod executor;
mod host;
mod path;
mod scope;

pub use error::{GraphError, NodeEvalError};
pub use executor::{NodeExecutor, NodeExecutorSet};
pub use host::RuntimeHost;
pub use path::{ControlBody, ControlPath, DataPath, PathRegistry, Producer};
pub use scope::{Scope, ScopeState};
