// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Entry -> Const(3) * Const(4) -> Log`: multiplies two literals and records the product.

use execution_graph::{RuntimeHost, Scope};
use execution_host::TokioRuntimeHost;
use graph_model::{EdgeId, Graph, MathOp, NodeKind};
use graph_value::Value;
use node_registry::builtin_executors;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let graph = Arc::new(Graph::new(
        "entry_mul_sink",
        vec![
            NodeKind::Entry { out: EdgeId(1) },
            NodeKind::Const {
                value: Value::Int(3),
                out: EdgeId(10),
            },
            NodeKind::Const {
                value: Value::Int(4),
                out: EdgeId(11),
            },
            NodeKind::Math {
                op: MathOp::Mul,
                in_a: EdgeId(10),
                in_b: EdgeId(11),
                out: EdgeId(12),
            },
            NodeKind::Log {
                in_: EdgeId(1),
                in_value: Some(EdgeId(12)),
                out: EdgeId(2),
            },
        ],
    ));

    let host = Arc::new(TokioRuntimeHost::new());
    let scope = Scope::bind(graph, &builtin_executors(), host as Arc<dyn RuntimeHost>).unwrap();
    Scope::run(&scope);
    scope.join().await.expect("scope ran to completion");
}
