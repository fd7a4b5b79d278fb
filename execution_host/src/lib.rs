// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component G: the production [`RuntimeHost`], backed by one `tokio::task::JoinSet` per scope.

use execution_graph::{NodeEvalError, RuntimeHost};
use futures::future::BoxFuture;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// A [`RuntimeHost`] that launches entry bodies as tokio tasks onto a private [`JoinSet`].
///
/// One instance is constructed per [`execution_graph::Scope`]; sharing one `TokioRuntimeHost`
/// across scopes would let one scope's `join` observe another scope's tasks, breaking the
/// "a scope does not outlive the runtime host that owns its tasks" invariant the other way round.
pub struct TokioRuntimeHost {
    tasks: Mutex<JoinSet<Result<(), NodeEvalError>>>,
    stopped: AtomicBool,
}

impl fmt::Debug for TokioRuntimeHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioRuntimeHost")
            .field("stopped", &self.stopped.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl Default for TokioRuntimeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TokioRuntimeHost {
    /// Creates a host with no tasks launched yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(JoinSet::new()),
            stopped: AtomicBool::new(false),
        }
    }
}

impl RuntimeHost for TokioRuntimeHost {
    fn launch(&self, body: BoxFuture<'static, Result<(), NodeEvalError>>) {
        let mut tasks = self
            .tasks
            .try_lock()
            .expect("TokioRuntimeHost::launch called while join() holds the task set");
        tasks.spawn(body);
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    fn join(&self) -> BoxFuture<'_, Result<(), NodeEvalError>> {
        Box::pin(async move {
            let mut tasks = self.tasks.lock().await;
            let mut first_error = None;

            while let Some(outcome) = tasks.join_next().await {
                match outcome {
                    Ok(Ok(())) => {}
                    Ok(Err(task_error)) => {
                        debug!(%task_error, "scope task failed");
                        first_error.get_or_insert(task_error);
                    }
                    Err(join_error) => {
                        warn!(%join_error, "scope task did not run to completion");
                        first_error.get_or_insert(NodeEvalError::new("task", join_error));
                    }
                }
            }

            match first_error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        })
    }
}
