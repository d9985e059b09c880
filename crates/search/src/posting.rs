//! Posting lists
//!
//! A posting list holds the IDs of every document containing a term. After
//! the build's finalization pass it is strictly ascending with no
//! duplicates, which is what [`intersect_sorted`] relies on.

use minisearch_core::DocId;

// ============================================================================
// PostingList
// ============================================================================

/// List of documents containing a term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    doc_ids: Vec<DocId>,
}

impl PostingList {
    /// Create a new empty posting list
    pub fn new() -> Self {
        PostingList { doc_ids: vec![] }
    }

    /// Append a document ID
    ///
    /// Order is not checked here; call [`finalize`](Self::finalize) once
    /// accumulation is complete.
    pub fn push(&mut self, doc_id: DocId) {
        self.doc_ids.push(doc_id);
    }

    /// Sort into ascending order and drop duplicate IDs
    pub fn finalize(&mut self) {
        self.doc_ids.sort_unstable();
        self.doc_ids.dedup();
    }

    /// Whether every ID is strictly greater than the previous one
    pub fn is_strictly_ascending(&self) -> bool {
        self.doc_ids.windows(2).all(|w| w[0] < w[1])
    }

    /// Whether the list contains `doc_id`
    ///
    /// Requires a finalized list.
    pub fn contains(&self, doc_id: DocId) -> bool {
        self.doc_ids.binary_search(&doc_id).is_ok()
    }

    /// Number of documents containing this term
    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    /// Check if posting list is empty
    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    /// Document IDs as a slice
    pub fn as_slice(&self) -> &[DocId] {
        &self.doc_ids
    }

    /// Iterate over document IDs
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.doc_ids.iter().copied()
    }

    /// Consume the list, returning its IDs
    pub fn into_vec(self) -> Vec<DocId> {
        self.doc_ids
    }
}

impl From<Vec<DocId>> for PostingList {
    fn from(doc_ids: Vec<DocId>) -> Self {
        PostingList { doc_ids }
    }
}

// ============================================================================
// Intersection
// ============================================================================

/// Intersect two ascending, duplicate-free ID lists
///
/// Linear two-pointer merge, O(n + m). The output is ascending.
pub fn intersect_sorted(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
