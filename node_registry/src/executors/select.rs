// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use execution_graph::{GraphError, NodeExecutor, Scope};
use graph_model::{Node, NodeKind};
use std::sync::Arc;

/// Binds `Select` nodes: installs a producer on `out` that pulls `in`, looks up a data-source id
/// in the node's case table, and forwards the pull to the matched source (or `inDefault`).
///
/// Performs no caching of its own: each pull of `out` re-pulls `in` and whichever source it
/// forwards to, consistent with data paths having no memoization across pulls.
#[derive(Debug, Default)]
pub struct SelectExecutor;

impl NodeExecutor for SelectExecutor {
    fn bind(&self, scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError> {
        let NodeKind::Select {
            in_,
            cases,
            in_default,
            out,
        } = node.kind()
        else {
            return Ok(false);
        };

        let in_ = scope.data_path(*in_);
        let cases = cases.clone();
        let in_default = scope.data_path(*in_default);
        let scope_for_sources = Arc::clone(scope);
        let out = scope.data_path(*out);

        out.bind(Arc::new(move || {
            let key = in_.get().map_err(|e| e.into_node_eval_error("Select"))?;

            let source = cases
                .iter()
                .find(|(case_key, _)| *case_key == key)
                .map_or_else(
                    || Arc::clone(&in_default),
                    |(_, id)| scope_for_sources.data_path(*id),
                );

            source.get().map_err(|e| e.into_node_eval_error("Select"))
        }))?;

        Ok(true)
    }
}
