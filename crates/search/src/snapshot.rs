//! Immutable index snapshots
//!
//! A snapshot bundles the document registry and inverted index produced by
//! one build. It is never mutated, so any number of threads can query it
//! through a shared `Arc`.

use crate::index::{IndexStats, InvertedIndex};
use crate::query;
use crate::registry::DocumentRegistry;
use minisearch_core::DocId;

/// Result of a build: registry, index and counters
#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    registry: DocumentRegistry,
    index: InvertedIndex,
    stats: IndexStats,
}

impl IndexSnapshot {
    pub(crate) fn new(registry: DocumentRegistry, index: InvertedIndex, stats: IndexStats) -> Self {
        Self {
            registry,
            index,
            stats,
        }
    }

    /// Snapshot with no documents
    pub fn empty() -> Self {
        Self::default()
    }

    /// Documents matching every term of `raw`, in ascending ID order
    pub fn query_and(&self, raw: &str) -> Vec<DocId> {
        query::query_and(&self.index, raw)
    }

    /// Resolve document IDs to their references
    pub fn resolve(&self, doc_ids: &[DocId]) -> Vec<&str> {
        self.registry.resolve(doc_ids)
    }

    /// Document registry
    pub fn documents(&self) -> &DocumentRegistry {
        &self.registry
    }

    /// Inverted index
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Build counters
    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}
