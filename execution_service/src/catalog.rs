// Copyright 2026 the Execution Graph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The graph catalog collaborator boundary.

use graph_model::Graph;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Looks up graphs by name.
///
/// The core only consumes this trait; it never parses documents or owns graph storage itself.
pub trait GraphCatalog: Send + Sync {
    /// Looks up a graph by its unique name.
    fn lookup_graph(&self, name: &str) -> Option<Arc<Graph>>;

    /// Lists every graph the catalog currently holds.
    fn list_graphs(&self) -> Vec<Arc<Graph>>;
}

/// An in-memory [`GraphCatalog`], suitable as the process's single source of truth for graphs
/// that were loaded once at startup (persistence/discovery of the document itself remains a
/// collaborator concern per the core's boundary).
#[derive(Debug, Default)]
pub struct InMemoryGraphCatalog {
    graphs: Mutex<HashMap<String, Arc<Graph>>>,
}

impl InMemoryGraphCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a graph, keyed by its name.
    pub fn insert(&self, graph: Graph) {
        self.graphs
            .lock()
            .expect("graph catalog mutex poisoned")
            .insert(graph.name().to_owned(), Arc::new(graph));
    }
}

impl GraphCatalog for InMemoryGraphCatalog {
    fn lookup_graph(&self, name: &str) -> Option<Arc<Graph>> {
        self.graphs
            .lock()
            .expect("graph catalog mutex poisoned")
            .get(name)
            .cloned()
    }

    fn list_graphs(&self) -> Vec<Arc<Graph>> {
        self.graphs
            .lock()
            .expect("graph catalog mutex poisoned")
            .values()
            .cloned()
            .collect()
    }
}
