// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component E: discovery and indexing of node-type → executor bindings.
//!
//! Every node kind [`graph_model`] declares has exactly one executor here. The registry itself
//! knows nothing about scope lifecycle or path mechanics beyond the `execution_graph` contracts it
//! binds against.

mod executors;
mod registry;

#[cfg(test)]
mod test_support;

pub use executors::{
    BranchExecutor, ConstExecutor, EntryExecutor, LogExecutor, MapRemoveExecutor, MathExecutor,
    SelectExecutor,
};
pub use registry::builtin_executors;
