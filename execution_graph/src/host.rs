// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The runtime host seam: component G.
//!
//! The core is agnostic to whether the host that executes entry bodies is single- or
//! multi-threaded; it only needs somewhere to launch bodies, a way to ask them to cooperatively
//! stop, and a way to wait for them all to settle. `execution_host` supplies the one production
//! implementation, backed by a `tokio::task::JoinSet` per scope.

use crate::error::NodeEvalError;
use futures::future::BoxFuture;
use std::fmt;

/// A cooperative task scheduler that can launch short bodies concurrently.
///
/// All tasks launched for one scope are expected to share that scope's lifetime: a host
/// implementation must not let a launched body observe scope state after the scope has moved
/// past `Stopped` into `Collected`. In practice this is arranged by the body closures themselves
/// holding an `Arc<Scope>` for as long as they run.
pub trait RuntimeHost: Send + Sync + fmt::Debug {
    /// Schedules `body` to run. Returns no handle: callers observe completion only through
    /// [`RuntimeHost::join`].
    fn launch(&self, body: BoxFuture<'static, Result<(), NodeEvalError>>);

    /// Raises the host's cooperative stop flag.
    ///
    /// This does not forcibly interrupt any in-flight task; it only gives bodies that poll
    /// [`RuntimeHost::is_stopped`] a way to notice and return early.
    fn stop(&self);

    /// Returns whether [`RuntimeHost::stop`] has been called.
    fn is_stopped(&self) -> bool;

    /// Awaits every launched task reaching quiescence.
    ///
    /// Returns the first task error observed, if any; later task failures do not override it, and
    /// do not prevent the remaining tasks from being awaited to completion.
    fn join(&self) -> BoxFuture<'_, Result<(), NodeEvalError>>;
}
