// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use execution_graph::{GraphError, NodeExecutor, Scope};
use graph_model::{Node, NodeKind};
use std::sync::Arc;

/// Binds `Const` nodes: installs a producer on `out` that always returns a clone of the node's
/// literal value.
#[derive(Debug, Default)]
pub struct ConstExecutor;

impl NodeExecutor for ConstExecutor {
    fn bind(&self, scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError> {
        let NodeKind::Const { value, out } = node.kind() else {
            return Ok(false);
        };

        let value = value.clone();
        scope
            .data_path(*out)
            .bind(Arc::new(move || Ok(value.clone())))?;

        Ok(true)
    }
}
