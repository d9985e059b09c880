//! Search API contract tests
//!
//! Validates the build/query contracts end to end through the public API,
//! including the filesystem document source.

use minisearch_search::{
    DocId, DocumentInput, DocumentSource, Error, FsSource, IndexBuilder, IndexSnapshot,
    MemorySource, SearchEngine,
};
use std::path::Path;

// ============================================================================
// Test Helpers
// ============================================================================

fn ids(raw: &[usize]) -> Vec<DocId> {
    raw.iter().copied().map(DocId::new).collect()
}

fn cat_dog() -> IndexSnapshot {
    IndexBuilder::build(vec![
        DocumentInput::available("doc1", "the cat sat"),
        DocumentInput::available("doc2", "the dog sat"),
    ])
}

fn write_doc(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

// ============================================================================
// Query Contract Tests
// ============================================================================

/// The two-document scenario from the query contract
#[test]
fn test_cat_dog_scenario() {
    let snapshot = cat_dog();

    assert_eq!(snapshot.query_and("the"), ids(&[0, 1]));
    assert_eq!(snapshot.query_and("cat"), ids(&[0]));
    assert_eq!(snapshot.query_and("cat dog"), ids(&[]));
    assert_eq!(snapshot.query_and("the sat"), ids(&[0, 1]));
    assert_eq!(snapshot.query_and("THE Cat!"), ids(&[0]));
}

/// A query with no letters is a non-match, not "match everything"
#[test]
fn test_empty_query_matches_nothing() {
    let snapshot = cat_dog();

    for query in ["", "   ", "42", "!!! ???", "\n\t"] {
        assert!(
            snapshot.query_and(query).is_empty(),
            "query {:?} should match nothing",
            query
        );
    }
}

/// A single-term query returns exactly that term's posting list
#[test]
fn test_single_term_equals_posting_list() {
    let snapshot = cat_dog();

    for term in snapshot.index().terms() {
        let expected = snapshot.index().lookup(term).unwrap().as_slice().to_vec();
        assert_eq!(snapshot.query_and(term), expected);
    }
    assert!(snapshot.query_and("absent").is_empty());
}

/// Results are resolved back to the caller's references
#[test]
fn test_results_resolve_to_references() {
    let snapshot = cat_dog();
    let hits = snapshot.query_and("sat");
    assert_eq!(snapshot.resolve(&hits), vec!["doc1", "doc2"]);
}

// ============================================================================
// Missing Document Tests
// ============================================================================

/// Document 1 of 2 cannot be read: both are registered, only doc 0 matches
#[test]
fn test_missing_document_resilience() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "doc1.txt", "the cat sat");

    let source = FsSource::with_root(dir.path());
    let snapshot = IndexBuilder::build_from_source(&source, &["doc1.txt", "doc2.txt"]);

    assert_eq!(snapshot.documents().len(), 2);
    assert_eq!(snapshot.documents().reference(DocId::new(1)), Some("doc2.txt"));
    assert_eq!(snapshot.query_and("cat"), ids(&[0]));
    assert_eq!(snapshot.query_and("the"), ids(&[0]));
}

/// All documents missing still yields a usable, empty index
#[test]
fn test_all_documents_missing() {
    let dir = tempfile::tempdir().unwrap();
    let source = FsSource::with_root(dir.path());
    let snapshot = IndexBuilder::build_from_source(&source, &["a.txt", "b.txt"]);

    assert_eq!(snapshot.stats().documents, 2);
    assert_eq!(snapshot.stats().unavailable, 2);
    assert!(snapshot.index().is_empty());
    assert!(snapshot.query_and("anything").is_empty());
}

/// Sources report unavailable documents as errors; the builder absorbs them
#[test]
fn test_source_reports_unavailable() {
    let source = MemorySource::new();
    let err = source.load("nope").unwrap_err();
    assert!(matches!(err, Error::DocumentUnavailable { .. }));
}

/// A trait object works as a source
#[test]
fn test_dyn_document_source() {
    let source: Box<dyn DocumentSource> = Box::new(MemorySource::new().with("a", "x y"));
    let snapshot = IndexBuilder::build_from_source(source.as_ref(), &["a"]);
    assert_eq!(snapshot.query_and("y x"), ids(&[0]));
}

// ============================================================================
// Engine Contract Tests
// ============================================================================

/// Filesystem corpus through the engine handle
#[test]
fn test_engine_over_files() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "doc1.txt", "Rust is a systems language.\nFast and safe.");
    write_doc(dir.path(), "doc2.txt", "Python is a scripting language; safe enough.");

    let engine = SearchEngine::new();
    let source = FsSource::with_root(dir.path());
    engine.build_from_source(&source, &["doc1.txt", "doc2.txt"]);

    assert_eq!(engine.query_and("language"), ids(&[0, 1]));
    assert_eq!(engine.query_and("safe RUST"), ids(&[0]));
    assert_eq!(engine.query_and("scripting"), ids(&[1]));
    assert!(engine.query_and("rust python").is_empty());
    assert_eq!(engine.documents(), vec!["doc1.txt", "doc2.txt"]);
}

/// Rebuilding swaps in a fresh index
#[test]
fn test_engine_rebuild_replaces() {
    let engine = SearchEngine::new();
    engine.build(vec![DocumentInput::available("a", "alpha")]);
    engine.build(vec![
        DocumentInput::available("b", "beta"),
        DocumentInput::available("c", "beta gamma"),
    ]);

    assert!(engine.query_and("alpha").is_empty());
    assert_eq!(engine.query_and("beta"), ids(&[0, 1]));
    assert_eq!(engine.documents(), vec!["b", "c"]);
}
