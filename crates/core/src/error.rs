//! Error types for minisearch
//!
//! Normalization, index construction and querying never fail. Errors only
//! come from the collaborators around the core: document sources and
//! configuration loading. We use `thiserror` for `Display` and `Error`.

use std::io;
use thiserror::Error;

/// Result type alias for minisearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for minisearch
#[derive(Debug, Error)]
pub enum Error {
    /// A document source could not produce content for a reference
    ///
    /// The index builder turns this into a registered document with no
    /// terms; it is never surfaced from a build.
    #[error("Document unavailable: {reference}: {source}")]
    DocumentUnavailable {
        /// Reference the caller supplied for the document
        reference: String,
        /// Underlying read failure
        #[source]
        source: io::Error,
    },

    /// I/O error outside of document loading
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file is malformed or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a `DocumentUnavailable` error
    pub fn unavailable(reference: impl Into<String>, source: io::Error) -> Self {
        Error::DocumentUnavailable {
            reference: reference.into(),
            source,
        }
    }

    /// Build a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unavailable() {
        let err = Error::unavailable(
            "data/doc1.txt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("Document unavailable"));
        assert!(msg.contains("data/doc1.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::config("missing field");
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_from_io() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_unavailable_exposes_source() {
        use std::error::Error as _;
        let err = Error::unavailable("x", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
    }
}
