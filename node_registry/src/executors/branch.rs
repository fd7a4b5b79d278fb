// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use execution_graph::{GraphError, NodeExecutor, Scope};
use graph_model::{Node, NodeKind};
use std::sync::Arc;

/// Binds `Branch` nodes: on invocation, pulls the key, looks it up in the node's case table, and
/// invokes the matched control path — or `outDefault` if nothing matched.
#[derive(Debug, Default)]
pub struct BranchExecutor;

impl NodeExecutor for BranchExecutor {
    fn bind(&self, scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError> {
        let NodeKind::Branch {
            in_,
            in_value,
            cases,
            out_default,
        } = node.kind()
        else {
            return Ok(false);
        };

        let in_value = scope.data_path(*in_value);
        let cases = cases.clone();
        let out_default = *out_default;
        let control = scope.control_path(*in_);

        control.declare(Arc::new(move |scope: Arc<Scope>| {
            let in_value = Arc::clone(&in_value);
            let cases = cases.clone();
            Box::pin(async move {
                let key = in_value
                    .get()
                    .map_err(|e| e.into_node_eval_error("Branch"))?;

                let target = cases
                    .iter()
                    .find(|(case_key, _)| *case_key == key)
                    .map_or(out_default, |(_, id)| *id);

                scope
                    .control_path(target)
                    .invoke(Arc::clone(&scope))
                    .await
                    .map_err(|e| e.into_node_eval_error("Branch"))
            })
        }))?;

        Ok(true)
    }
}
