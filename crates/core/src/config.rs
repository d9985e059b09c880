//! Shell configuration via `minisearch.toml`
//!
//! The file lists the corpus to index and the prompt settings of the
//! interactive shell. A missing file means defaults; a malformed one is an
//! error.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "minisearch.toml";

fn default_documents() -> Vec<String> {
    vec!["data/doc1.txt".to_string(), "data/doc2.txt".to_string()]
}

fn default_prompt() -> String {
    "query> ".to_string()
}

fn default_exit_command() -> String {
    "exit".to_string()
}

/// Configuration loaded from `minisearch.toml`.
///
/// # Example
///
/// ```toml
/// documents = ["data/doc1.txt", "data/doc2.txt"]
/// prompt = "query> "
/// exit_command = "exit"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Document references, indexed in this order.
    #[serde(default = "default_documents")]
    pub documents: Vec<String>,
    /// Prompt printed before each query line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Line that ends the shell (exact match).
    #[serde(default = "default_exit_command")]
    pub exit_command: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            documents: default_documents(),
            prompt: default_prompt(),
            exit_command: default_exit_command(),
        }
    }
}

impl SearchConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Read a config file if it exists, falling back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns an error if `exit_command` is empty, since an empty line
    /// would then end the shell.
    pub fn validate(&self) -> Result<()> {
        if self.exit_command.is_empty() {
            return Err(Error::config("exit_command must not be empty"));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Minisearch configuration
#
# Documents to index, in order. Document IDs follow this order.
documents = ["data/doc1.txt", "data/doc2.txt"]

# Prompt shown before each query.
prompt = "query> "

# Typing this line exactly ends the session.
exit_command = "exit"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.documents, vec!["data/doc1.txt", "data/doc2.txt"]);
        assert_eq!(config.prompt, "query> ");
        assert_eq!(config.exit_command, "exit");
    }

    #[test]
    fn test_default_toml_matches_default() {
        let parsed = SearchConfig::from_toml_str(SearchConfig::default_toml()).unwrap();
        assert_eq!(parsed, SearchConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed = SearchConfig::from_toml_str(r#"documents = ["a.txt"]"#).unwrap();
        assert_eq!(parsed.documents, vec!["a.txt"]);
        assert_eq!(parsed.exit_command, "exit");
    }

    #[test]
    fn test_empty_exit_command_rejected() {
        let err = SearchConfig::from_toml_str(r#"exit_command = """#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = SearchConfig::from_toml_str("documents = [").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig::load_or_default(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "prompt = \"> \"\n").unwrap();
        let config = SearchConfig::from_file(&path).unwrap();
        assert_eq!(config.prompt, "> ");
    }
}
