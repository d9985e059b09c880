//! Core types for minisearch
//!
//! This crate defines the foundational types used throughout the system:
//! - DocId: dense document identifier
//! - Error: error type for collaborators (document sources, config)
//! - SearchConfig: `minisearch.toml` model

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{SearchConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use types::DocId;
