// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use execution_graph::{GraphError, NodeExecutor, Scope};
use graph_model::{Node, NodeKind};
use std::sync::Arc;

/// Recognizes `Entry` nodes.
///
/// An entry has nothing to install: its outgoing control path's body is declared by whichever
/// downstream node treats that same edge id as its incoming control id. The scope invokes it
/// directly at [`Scope::run`] time.
#[derive(Debug, Default)]
pub struct EntryExecutor;

impl NodeExecutor for EntryExecutor {
    fn bind(&self, _scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError> {
        Ok(matches!(node.kind(), NodeKind::Entry { .. }))
    }
}
