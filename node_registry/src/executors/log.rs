// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use execution_graph::{GraphError, NodeExecutor, Scope};
use graph_model::{Node, NodeKind};
use std::sync::Arc;
use tracing::info;

/// Binds `Log` nodes: a control passthrough that records an optional data input before
/// forwarding. The observable sink every end-to-end scenario needs, without making the core own
/// any particular notion of "output".
#[derive(Debug, Default)]
pub struct LogExecutor;

impl NodeExecutor for LogExecutor {
    fn bind(&self, scope: &Arc<Scope>, node: &Node) -> Result<bool, GraphError> {
        let NodeKind::Log { in_, in_value, out } = node.kind() else {
            return Ok(false);
        };

        let in_value = in_value.map(|id| scope.data_path(id));
        let out = *out;
        let control = scope.control_path(*in_);

        control.declare(Arc::new(move |scope: Arc<Scope>| {
            let in_value = in_value.clone();
            Box::pin(async move {
                if let Some(in_value) = &in_value {
                    let value = in_value.get().map_err(|e| e.into_node_eval_error("Log"))?;
                    info!(%value, "log");
                } else {
                    info!("log");
                }

                scope
                    .control_path(out)
                    .invoke(Arc::clone(&scope))
                    .await
                    .map_err(|e| e.into_node_eval_error("Log"))
            })
        }))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{bind_const, NoopHost};
    use execution_graph::NodeExecutorSet;
    use graph_model::{EdgeId, Graph};
    use graph_value::Value;
    use std::sync::{Arc as StdArc, Mutex};

    #[tokio::test]
    async fn forwards_to_out_after_recording() {
        let graph = Arc::new(Graph::new(
            "g",
            vec![NodeKind::Log {
                in_: EdgeId(1),
                in_value: Some(EdgeId(2)),
                out: EdgeId(3),
            }],
        ));
        let executors: NodeExecutorSet = Arc::from(vec![Arc::new(LogExecutor) as Arc<dyn NodeExecutor>]);
        let scope = Scope::bind(graph, &executors, Arc::new(NoopHost)).unwrap();
        bind_const(&scope, EdgeId(2), Value::Int(12));

        let forwarded = StdArc::new(Mutex::new(false));
        let flag = StdArc::clone(&forwarded);
        scope
            .control_path(EdgeId(3))
            .declare(Arc::new(move |_scope| {
                let flag = StdArc::clone(&flag);
                Box::pin(async move {
                    *flag.lock().unwrap() = true;
                    Ok(())
                })
            }))
            .unwrap();

        scope.control_path(EdgeId(1)).invoke(Arc::clone(&scope)).await.unwrap();
        assert!(*forwarded.lock().unwrap());
    }
}
