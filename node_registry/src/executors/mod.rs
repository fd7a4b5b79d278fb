// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builtin node executors, one module per node kind.

mod branch;
mod const_value;
mod entry;
mod log;
mod map_remove;
mod math;
mod select;

pub use branch::BranchExecutor;
pub use const_value::ConstExecutor;
pub use entry::EntryExecutor;
pub use log::LogExecutor;
pub use map_remove::MapRemoveExecutor;
pub use math::MathExecutor;
pub use select::SelectExecutor;
