// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Entry -> Log(Map.Remove)`: removes one key from a literal map and records the result.

use execution_graph::{RuntimeHost, Scope};
use execution_host::TokioRuntimeHost;
use graph_model::{EdgeId, Graph, NodeKind};
use graph_value::{MapValue, Value};
use node_registry::builtin_executors;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let map = MapValue::from_pairs(vec![
        (Value::Str("x".into()), Value::Int(1)),
        (Value::Str("y".into()), Value::Int(2)),
    ]);

    let graph = Arc::new(Graph::new(
        "map_remove",
        vec![
            NodeKind::Entry { out: EdgeId(1) },
            NodeKind::Const {
                value: Value::Map(map),
                out: EdgeId(2),
            },
            NodeKind::Const {
                value: Value::Str("x".into()),
                out: EdgeId(3),
            },
            NodeKind::MapRemove {
                in_: EdgeId(2),
                in_key: EdgeId(3),
                out: EdgeId(4),
            },
            NodeKind::Log {
                in_: EdgeId(1),
                in_value: Some(EdgeId(4)),
                out: EdgeId(5),
            },
        ],
    ));

    let host = Arc::new(TokioRuntimeHost::new());
    let scope = Scope::bind(graph, &builtin_executors(), host as Arc<dyn RuntimeHost>).unwrap();
    Scope::run(&scope);
    scope.join().await.expect("scope ran to completion");
}
