//! Document registry
//!
//! Maps each `DocId` back to the reference the caller supplied. Documents
//! whose content could not be loaded are still registered so ID-indexed
//! lookups stay valid.

use minisearch_core::DocId;

#[derive(Debug, Clone)]
struct RegisteredDocument {
    reference: String,
    available: bool,
}

/// Ordered list of indexed documents
#[derive(Debug, Clone, Default)]
pub struct DocumentRegistry {
    docs: Vec<RegisteredDocument>,
}

impl DocumentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document and assign it the next ID
    ///
    /// The same reference registered twice gets two distinct IDs.
    pub fn register(&mut self, reference: impl Into<String>, available: bool) -> DocId {
        let id = DocId::new(self.docs.len());
        self.docs.push(RegisteredDocument {
            reference: reference.into(),
            available,
        });
        id
    }

    /// Reference string for a document
    pub fn reference(&self, doc_id: DocId) -> Option<&str> {
        self.docs.get(doc_id.index()).map(|d| d.reference.as_str())
    }

    /// Whether the document's content was loaded at build time
    ///
    /// Returns false for unknown IDs.
    pub fn is_available(&self, doc_id: DocId) -> bool {
        self.docs
            .get(doc_id.index())
            .map(|d| d.available)
            .unwrap_or(false)
    }

    /// Resolve IDs to references, skipping unknown IDs
    pub fn resolve(&self, doc_ids: &[DocId]) -> Vec<&str> {
        doc_ids.iter().filter_map(|&id| self.reference(id)).collect()
    }

    /// Number of registered documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether no documents are registered
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Number of documents that could not be loaded
    pub fn unavailable_count(&self) -> usize {
        self.docs.iter().filter(|d| !d.available).count()
    }

    /// Iterate over `(DocId, reference)` pairs in ID order
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str)> + '_ {
        self.docs
            .iter()
            .enumerate()
            .map(|(i, d)| (DocId::new(i), d.reference.as_str()))
    }

    /// All references in ID order
    pub fn references(&self) -> Vec<&str> {
        self.docs.iter().map(|d| d.reference.as_str()).collect()
    }
}
