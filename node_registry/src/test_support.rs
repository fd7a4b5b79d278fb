// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test scaffolding for executor unit tests.

use execution_graph::{NodeEvalError, RuntimeHost, Scope};
use futures::future::BoxFuture;
use graph_model::EdgeId;
use graph_value::Value;
use std::sync::Arc;

/// A host that never actually schedules anything; executor tests drive control paths directly.
#[derive(Debug, Default)]
pub(crate) struct NoopHost;

impl RuntimeHost for NoopHost {
    fn launch(&self, _body: BoxFuture<'static, Result<(), NodeEvalError>>) {}

    fn stop(&self) {}

    fn is_stopped(&self) -> bool {
        false
    }

    fn join(&self) -> BoxFuture<'_, Result<(), NodeEvalError>> {
        Box::pin(async { Ok(()) })
    }
}

/// Binds a constant producer directly onto `out`, bypassing `ConstExecutor`, for tests that want
/// to seed a data path without constructing a whole `Const` node.
pub(crate) fn bind_const(scope: &Arc<Scope>, out: EdgeId, value: Value) {
    scope
        .data_path(out)
        .bind(Arc::new(move || Ok(value.clone())))
        .unwrap();
}
