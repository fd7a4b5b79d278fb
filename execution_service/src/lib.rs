// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The service collaborator boundary: the catalog a [`GraphService`] looks graphs up in, the
//! scope table it tracks running graphs in, soft runtime configuration, and the naming/framing
//! convention for a persisted graph document.
//!
//! Nothing in `execution_graph` depends on this crate. This is the outermost layer a transport
//! (HTTP handler, RPC dispatcher, CLI command) would actually hold an instance of.

mod catalog;
mod config;
mod persist;
mod service;

pub use catalog::{GraphCatalog, InMemoryGraphCatalog};
pub use config::RuntimeConfig;
pub use persist::{compress, decompress, file_name_for};
pub use service::{DefaultGraphService, GraphService, ScopeTable};
