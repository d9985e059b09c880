//! Identifier types shared by the index and its collaborators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense, zero-based document identifier
///
/// IDs are assigned in the order documents are presented to the index
/// builder, so `DocId(n)` is always the n-th document of a build, whether
/// or not its content could be read. Backed by `usize`: a registry never
/// holds more documents than it can number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(usize);

impl DocId {
    /// Create a document ID from its registry position
    pub const fn new(id: usize) -> Self {
        DocId(id)
    }

    /// Position of the document in its registry
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for DocId {
    fn from(id: usize) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_id_roundtrip() {
        let id = DocId::new(7);
        assert_eq!(id.index(), 7);
        assert_eq!(DocId::from(7), id);
    }

    #[test]
    fn test_doc_id_ordering() {
        let mut ids = vec![DocId::new(3), DocId::new(0), DocId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![DocId::new(0), DocId::new(2), DocId::new(3)]);
    }

    #[test]
    fn test_doc_id_covers_full_usize_range() {
        let last = usize::MAX;
        assert_eq!(DocId::new(last).index(), last);
        assert_ne!(DocId::new(last), DocId::new(last - 1));
    }

    #[test]
    fn test_doc_id_display() {
        assert_eq!(DocId::new(42).to_string(), "42");
    }
}
