//! Document sources
//!
//! A document source turns a caller-supplied reference into raw bytes, or
//! reports that the document is unavailable. The index builder only ever
//! sees the outcome; the storage medium is up to the source.

use minisearch_core::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplies document content for a reference
pub trait DocumentSource: Send + Sync {
    /// Load the full content of `reference`
    ///
    /// # Errors
    ///
    /// Returns `Error::DocumentUnavailable` when the content cannot be read.
    fn load(&self, reference: &str) -> Result<Vec<u8>>;
}

// ============================================================================
// FsSource
// ============================================================================

/// Reads documents from the filesystem
///
/// References are paths. Relative paths are resolved against `root` when
/// one is set, otherwise against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    root: Option<PathBuf>,
}

impl FsSource {
    /// Source resolving paths against the working directory
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Source resolving relative paths against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl DocumentSource for FsSource {
    fn load(&self, reference: &str) -> Result<Vec<u8>> {
        std::fs::read(self.resolve(reference)).map_err(|e| Error::unavailable(reference, e))
    }
}

// ============================================================================
// MemorySource
// ============================================================================

/// In-memory document store keyed by reference
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document
    pub fn insert(&mut self, reference: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.docs.insert(reference.into(), content.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, reference: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(reference, content);
        self
    }
}

impl DocumentSource for MemorySource {
    fn load(&self, reference: &str) -> Result<Vec<u8>> {
        self.docs.get(reference).cloned().ok_or_else(|| {
            Error::unavailable(
                reference,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            )
        })
    }
}
