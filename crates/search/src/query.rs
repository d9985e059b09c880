//! Conjunctive (AND) queries
//!
//! A query is normalized exactly like document content. A document matches
//! when it contains every query term; there is no ranking.
//!
//! - No terms after normalization: no match
//! - Any term missing from the index: no match
//! - Otherwise: running intersection of the posting lists, seeded with the
//!   first term's list

use crate::index::InvertedIndex;
use crate::normalizer::tokenize;
use crate::posting::intersect_sorted;
use minisearch_core::DocId;

/// Documents containing every term of `raw`, in ascending ID order
///
/// # Example
///
/// ```
/// use minisearch_search::{query_and, DocumentInput, IndexBuilder};
///
/// let snapshot = IndexBuilder::build(vec![
///     DocumentInput::available("doc1", "the cat sat"),
///     DocumentInput::available("doc2", "the dog sat"),
/// ]);
/// let hits = query_and(snapshot.index(), "THE Cat!");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].index(), 0);
/// ```
pub fn query_and(index: &InvertedIndex, raw: &str) -> Vec<DocId> {
    let terms = tokenize(raw);
    let Some((first, rest)) = terms.split_first() else {
        return Vec::new();
    };

    let Some(first_list) = index.lookup(first) else {
        return Vec::new();
    };
    let mut hits = first_list.as_slice().to_vec();

    for term in rest {
        let Some(list) = index.lookup(term) else {
            return Vec::new();
        };
        // Remaining lookups still run once `hits` is empty; only the merge is skipped.
        if !hits.is_empty() {
            hits = intersect_sorted(&hits, list.as_slice());
        }
    }

    tracing::debug!(
        target: "minisearch::query",
        terms = terms.len(),
        hits = hits.len(),
        "AND query evaluated"
    );

    hits
}
