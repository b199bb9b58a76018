//! Shared graph cache keyed by base URI.
//!
//! The cache is owned and populated by the embedding host; the renderer only
//! performs lookups. `DashMap` keeps reads lock-free, so host tasks may
//! insert graphs while a render is in flight without contending on a global
//! lock.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use super::Graph;

/// Process-wide mapping from a base-URI string to its graph.
///
/// Entries are shared handles: looking a graph up never clones the graph
/// itself, only bumps its reference count.
#[derive(Default)]
pub struct GraphCache {
    graphs: DashMap<String, Arc<dyn Graph>>,
}

impl GraphCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the graph cached under `base_uri`.
    pub fn insert(&self, base_uri: impl Into<String>, graph: Arc<dyn Graph>) {
        self.graphs.insert(base_uri.into(), graph);
    }

    /// Look up the graph cached under `base_uri`.
    pub fn lookup(&self, base_uri: &str) -> Option<Arc<dyn Graph>> {
        self.graphs.get(base_uri).map(|entry| Arc::clone(entry.value()))
    }

    /// Number of cached graphs.
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    /// Whether the cache holds no graphs.
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

impl fmt::Debug for GraphCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphCache").field("entries", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::StatementGraph;

    #[test]
    fn lookup_returns_the_cached_graph() {
        let cache = GraphCache::new();
        cache.insert(
            "http://example.org/",
            Arc::new(StatementGraph::from_lines("<subject> <p> <o> .")),
        );

        let graph = cache.lookup("http://example.org/").expect("entry present");
        assert_eq!(graph.to_text(), "<subject> <p> <o> .");
    }

    #[test]
    fn lookup_misses_for_unknown_base_uri() {
        let cache = GraphCache::new();
        assert!(cache.lookup("http://example.org/missing").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn insert_replaces_an_existing_entry() {
        let cache = GraphCache::new();
        cache.insert("http://example.org/", Arc::new(StatementGraph::from_lines("<a> <b> <c> .")));
        cache.insert("http://example.org/", Arc::new(StatementGraph::from_lines("<d> <e> <f> .")));

        assert_eq!(cache.len(), 1);
        let graph = cache.lookup("http://example.org/").expect("entry present");
        assert_eq!(graph.to_text(), "<d> <e> <f> .");
    }

    #[test]
    fn graphs_are_shared_not_copied() {
        let cache = GraphCache::new();
        let graph: Arc<dyn Graph> = Arc::new(StatementGraph::from_lines("<s> <p> <o> ."));
        cache.insert("http://example.org/", Arc::clone(&graph));

        let looked_up = cache.lookup("http://example.org/").expect("entry present");
        assert!(Arc::ptr_eq(&graph, &looked_up));
    }
}
