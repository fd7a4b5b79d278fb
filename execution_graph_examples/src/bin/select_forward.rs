// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Entry -> Log(Select)`: a `Select` node picks between two literal sources by key and the
//! chosen value is recorded.

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
        "select_forward",
        vec![
            NodeKind::Entry { out: EdgeId(1) },
            NodeKind::Const {
                value: Value::Int(1),
                out: EdgeId(2),
            },
            NodeKind::Const {
                value: Value::Str("A".into()),
                out: EdgeId(10),
            },
            NodeKind::Const {
                value: Value::Str("B".into()),
                out: EdgeId(11),
            },
            NodeKind::Const {
                value: Value::Str("D".into()),
                out: EdgeId(12),
            },
            NodeKind::Select {
                in_: EdgeId(2),
                cases: vec![(Value::Int(0), EdgeId(10)), (Value::Int(1), EdgeId(11))],
                in_default: EdgeId(12),
                out: EdgeId(13),
            },
            NodeKind::Log {
                in_: EdgeId(1),
                in_value: Some(EdgeId(13)),
                out: EdgeId(20),
            },
        ],
    ));

    let host = Arc::new(TokioRuntimeHost::new());
    let scope = Scope::bind(graph, &builtin_executors(), host as Arc<dyn RuntimeHost>).unwrap();
    Scope::run(&scope);
    scope.join().await.expect("scope ran to completion");
}
