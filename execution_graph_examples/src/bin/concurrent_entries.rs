// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two `Entry` nodes launched into the same scope: both run concurrently, with no ordering
//! guarantee between them, and `Scope::join` waits for both to settle.

use execution_graph::{RuntimeHost, Scope};
use execution_host::TokioRuntimeHost;
use graph_model::{EdgeId, Graph, NodeKind};
use node_registry::builtin_executors;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let graph = Arc::new(Graph::new(
        "concurrent_entries",
        vec![
            NodeKind::Entry { out: EdgeId(1) },
            NodeKind::Entry { out: EdgeId(2) },
            NodeKind::Log {
                in_: EdgeId(1),
                in_value: None,
                out: EdgeId(3),
            },
            NodeKind::Log {
                in_: EdgeId(2),
                in_value: None,
                out: EdgeId(3),
            },
        ],
    ));

    let host = Arc::new(TokioRuntimeHost::new());
    let scope = Scope::bind(graph, &builtin_executors(), host as Arc<dyn RuntimeHost>).unwrap();
    Scope::run(&scope);
    scope.join().await.expect("both entries ran to completion");
}
