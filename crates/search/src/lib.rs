//! Term indexing and conjunctive search
//!
//! This crate provides:
//! - Normalizer shared by documents and queries
//! - PostingList and sorted-list intersection
//! - IndexBuilder producing an immutable IndexSnapshot
//! - query_and for AND queries over a snapshot
//! - SearchEngine for rebuild-and-publish with concurrent readers
//! - DocumentSource implementations (filesystem, in-memory)
//!
//! # Usage
//!
//! ```
//! use minisearch_search::{DocumentInput, IndexBuilder};
//!
//! let snapshot = IndexBuilder::build(vec![
//!     DocumentInput::available("doc1", "the cat sat"),
//!     DocumentInput::available("doc2", "the dog sat"),
//! ]);
//! let hits = snapshot.query_and("the sat");
//! assert_eq!(snapshot.resolve(&hits), vec!["doc1", "doc2"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod index;
pub mod normalizer;
pub mod posting;
pub mod query;
pub mod registry;
pub mod snapshot;
pub mod source;

// Re-export commonly used types
pub use engine::SearchEngine;
pub use index::{DocumentInput, IndexBuilder, IndexStats, InvertedIndex};
pub use minisearch_core::{DocId, Error, Result};
pub use normalizer::{normalize, tokenize, tokenize_unique, tokenize_unique_bytes};
pub use posting::{intersect_sorted, PostingList};
pub use query::query_and;
pub use registry::DocumentRegistry;
pub use snapshot::IndexSnapshot;
pub use source::{DocumentSource, FsSource, MemorySource};
