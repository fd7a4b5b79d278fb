// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Entry -> Branch` where the key matches a case: only the matched case's `Log` runs.

use execution_graph::{RuntimeHost, Scope};
use execution_host::TokioRuntimeHost;
use graph_model::{EdgeId, Graph, NodeKind};
use graph_value::Value;
use node_registry::builtin_executors;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let graph = Arc::new(Graph::new(
        "branch_match",
        vec![
            NodeKind::Entry { out: EdgeId(1) },
            NodeKind::Const {
                value: Value::Str("b".into()),
                out: EdgeId(2),
            },
            NodeKind::Branch {
                in_: EdgeId(1),
                in_value: EdgeId(2),
                cases: vec![
                    (Value::Str("a".into()), EdgeId(20)),
                    (Value::Str("b".into()), EdgeId(21)),
                ],
                out_default: EdgeId(22),
            },
            NodeKind::Log {
                in_: EdgeId(20),
                in_value: None,
                out: EdgeId(30),
            },
            NodeKind::Log {
                in_: EdgeId(21),
                in_value: None,
                out: EdgeId(30),
            },
            NodeKind::Log {
                in_: EdgeId(22),
                in_value: None,
                out: EdgeId(30),
            },
        ],
    ));

    let host = Arc::new(TokioRuntimeHost::new());
    let scope = Scope::bind(graph, &builtin_executors(), host as Arc<dyn RuntimeHost>).unwrap();
    Scope::run(&scope);
    scope.join().await.expect("scope ran to completion");
}
