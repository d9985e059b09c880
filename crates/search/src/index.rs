//! Inverted index construction
//!
//! This module provides:
//! - InvertedIndex: term -> posting list mapping
//! - IndexBuilder: accumulation followed by a separate finalization pass
//! - IndexStats: corpus counters reported after each build
//!
//! # Build phases
//!
//! 1. **Accumulate**: each document's distinct terms append its ID to the
//!    term's posting list. Unavailable documents are registered but add
//!    no terms.
//! 2. **Finalize**: every posting list is sorted into strictly ascending
//!    order. Intersection at query time depends on this.
//!
//! A build always starts from scratch. Nothing carries over from a
//! previous snapshot.

use crate::normalizer::tokenize_unique_bytes;
use crate::posting::PostingList;
use crate::registry::DocumentRegistry;
use crate::snapshot::IndexSnapshot;
use crate::source::DocumentSource;
use minisearch_core::DocId;
use rustc_hash::FxHashMap;

// ============================================================================
// DocumentInput
// ============================================================================

/// One document handed to the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInput {
    /// Caller-supplied reference, kept for display
    pub reference: String,
    /// Raw content, or `None` if it could not be retrieved
    pub content: Option<Vec<u8>>,
}

impl DocumentInput {
    /// Document with readable content
    pub fn available(reference: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            reference: reference.into(),
            content: Some(content.into()),
        }
    }

    /// Document whose content could not be retrieved
    pub fn unavailable(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            content: None,
        }
    }
}

// ============================================================================
// IndexStats
// ============================================================================

/// Counters describing a built index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Registered documents, including unavailable ones
    pub documents: usize,
    /// Documents whose content could not be loaded
    pub unavailable: usize,
    /// Distinct terms
    pub terms: usize,
    /// Sum of all posting list lengths
    pub postings: usize,
}

// ============================================================================
// InvertedIndex
// ============================================================================

/// Term -> posting list mapping
///
/// Read-only once built. Every posting list is strictly ascending and
/// duplicate-free.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: FxHashMap<String, PostingList>,
}

impl InvertedIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Posting list for a term
    ///
    /// Returns None if the term does not occur in any document.
    pub fn lookup(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Whether the term occurs in any document
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of documents containing the term
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map(PostingList::len).unwrap_or(0)
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds no terms
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// All terms, sorted
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Iterate over `(term, posting list)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> + '_ {
        self.postings.iter().map(|(t, p)| (t.as_str(), p))
    }

    /// Sum of all posting list lengths
    pub fn total_postings(&self) -> usize {
        self.postings.values().map(PostingList::len).sum()
    }
}

// ============================================================================
// IndexBuilder
// ============================================================================

/// Builds an [`IndexSnapshot`] from an ordered sequence of documents
#[derive(Debug, Default)]
pub struct IndexBuilder {
    registry: DocumentRegistry,
    postings: FxHashMap<String, PostingList>,
}

impl IndexBuilder {
    /// Create a builder with no documents
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document and index its distinct terms
    ///
    /// `content` of `None` registers the document without contributing any
    /// term.
    pub fn add_document(&mut self, reference: impl Into<String>, content: Option<&[u8]>) -> DocId {
        let doc_id = self.registry.register(reference, content.is_some());
        if let Some(bytes) = content {
            for term in tokenize_unique_bytes(bytes) {
                self.postings.entry(term).or_default().push(doc_id);
            }
        }
        doc_id
    }

    /// Number of documents added so far
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no document has been added
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Run the finalization pass and publish an immutable snapshot
    pub fn finish(self) -> IndexSnapshot {
        let IndexBuilder {
            registry,
            mut postings,
        } = self;

        for list in postings.values_mut() {
            list.finalize();
        }

        let index = InvertedIndex { postings };
        let stats = IndexStats {
            documents: registry.len(),
            unavailable: registry.unavailable_count(),
            terms: index.term_count(),
            postings: index.total_postings(),
        };

        tracing::info!(
            target: "minisearch::index",
            documents = stats.documents,
            unavailable = stats.unavailable,
            terms = stats.terms,
            postings = stats.postings,
            "Inverted index built"
        );

        IndexSnapshot::new(registry, index, stats)
    }

    /// Build a snapshot from documents whose content is already loaded
    pub fn build<I>(documents: I) -> IndexSnapshot
    where
        I: IntoIterator<Item = DocumentInput>,
    {
        let mut builder = IndexBuilder::new();
        for doc in documents {
            builder.add_document(doc.reference, doc.content.as_deref());
        }
        builder.finish()
    }

    /// Build a snapshot, loading each reference through `source`
    ///
    /// A reference the source cannot load is registered with no terms.
    pub fn build_from_source<S, R>(source: &S, references: &[R]) -> IndexSnapshot
    where
        S: DocumentSource + ?Sized,
        R: AsRef<str>,
    {
        let mut builder = IndexBuilder::new();
        for reference in references {
            let reference = reference.as_ref();
            match source.load(reference) {
                Ok(bytes) => {
                    builder.add_document(reference, Some(bytes.as_slice()));
                }
                Err(e) => {
                    tracing::warn!(
                        target: "minisearch::index",
                        reference = reference,
                        error = %e,
                        "Document unavailable, indexed with no terms"
                    );
                    builder.add_document(reference, None);
                }
            }
        }
        builder.finish()
    }
}
