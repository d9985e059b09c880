//! Minisearch - in-memory inverted index with AND queries
//!
//! Builds a term -> document mapping from a small corpus and answers
//! conjunctive membership queries over it.
//!
//! # Quick Start
//!
//! ```
//! use minisearch::{DocumentInput, SearchEngine};
//!
//! let engine = SearchEngine::new();
//! engine.build(vec![
//!     DocumentInput::available("doc1", "the cat sat"),
//!     DocumentInput::available("doc2", "the dog sat"),
//! ]);
//!
//! let hits = engine.query_and("THE Cat!");
//! assert_eq!(engine.snapshot().resolve(&hits), vec!["doc1"]);
//! ```
//!
//! # Architecture
//!
//! [`IndexBuilder`] produces an immutable [`IndexSnapshot`]; queries run
//! against a snapshot and never mutate it. [`SearchEngine`] publishes
//! snapshots for concurrent readers and serializes rebuilds.

// Re-export the public API from minisearch-search
pub use minisearch_core::{SearchConfig, CONFIG_FILE_NAME};
pub use minisearch_search::*;
