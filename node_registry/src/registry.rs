// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembly of the builtin executors into a [`NodeExecutorSet`].

use crate::executors::{
    BranchExecutor, ConstExecutor, EntryExecutor, LogExecutor, MapRemoveExecutor, MathExecutor,
    SelectExecutor,
};
use execution_graph::{NodeExecutor, NodeExecutorSet};
use std::sync::Arc;

/// Returns the builtin executors in discovery order.
///
/// Order only matters in that the scope tries executors front-to-back and takes the first match;
/// since every builtin executor matches a disjoint node kind, the order here is cosmetic. This is
/// the explicit, process-startup registry the design notes call for — no scanning of packaged
/// resources.
#[must_use]
pub fn builtin_executors() -> NodeExecutorSet {
    let executors: Vec<Arc<dyn NodeExecutor>> = vec![
        Arc::new(EntryExecutor),
        Arc::new(BranchExecutor),
        Arc::new(SelectExecutor),
        Arc::new(MapRemoveExecutor),
        Arc::new(MathExecutor),
        Arc::new(ConstExecutor),
        Arc::new(LogExecutor),
    ];
    Arc::from(executors)
}
