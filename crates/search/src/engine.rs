//! Search engine handle
//!
//! Owns the currently published [`IndexSnapshot`] and serializes rebuilds.
//!
//! # Thread Safety
//!
//! - Builds take an exclusive build guard, so two builds never interleave.
//! - A finished build replaces the published snapshot in one swap.
//! - Queries clone the current `Arc` and never block on a running build.
//!   A query that started before a swap finishes against the old snapshot.

use crate::index::{DocumentInput, IndexBuilder, IndexStats};
use crate::snapshot::IndexSnapshot;
use crate::source::DocumentSource;
use minisearch_core::DocId;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// Long-lived search handle that can be rebuilt and queried concurrently
pub struct SearchEngine {
    current: RwLock<Arc<IndexSnapshot>>,
    build_guard: Mutex<()>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Create an engine publishing an empty snapshot
    pub fn new() -> Self {
        SearchEngine {
            current: RwLock::new(Arc::new(IndexSnapshot::empty())),
            build_guard: Mutex::new(()),
        }
    }

    /// Rebuild from loaded documents and publish the result
    ///
    /// The previous snapshot is discarded; nothing is carried over.
    pub fn build<I>(&self, documents: I) -> IndexStats
    where
        I: IntoIterator<Item = DocumentInput>,
    {
        let _guard = self.build_guard.lock();
        self.publish(IndexBuilder::build(documents))
    }

    /// Rebuild by loading `references` through `source` and publish the result
    pub fn build_from_source<S, R>(&self, source: &S, references: &[R]) -> IndexStats
    where
        S: DocumentSource + ?Sized,
        R: AsRef<str>,
    {
        let _guard = self.build_guard.lock();
        self.publish(IndexBuilder::build_from_source(source, references))
    }

    fn publish(&self, snapshot: IndexSnapshot) -> IndexStats {
        let stats = snapshot.stats();
        *self.current.write() = Arc::new(snapshot);
        tracing::debug!(
            target: "minisearch::engine",
            documents = stats.documents,
            terms = stats.terms,
            "Snapshot published"
        );
        stats
    }

    /// Currently published snapshot
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Query the currently published snapshot
    pub fn query_and(&self, raw: &str) -> Vec<DocId> {
        self.snapshot().query_and(raw)
    }

    /// References of all registered documents, in ID order
    pub fn documents(&self) -> Vec<String> {
        self.snapshot()
            .documents()
            .references()
            .into_iter()
            .map(String::from)
            .collect()
    }
}
