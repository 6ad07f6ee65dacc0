//! Conversion options
//!
//! Options can be loaded from a YAML (or JSON) file and overridden from the
//! command line.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How registry keys for response definitions are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKeyStrategy {
    /// Hash of the response name; responses sharing a name share a definition
    #[default]
    Name,
    /// Hash of path, method and response name
    Operation,
}

/// Which folder names operations are tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TagStrategy {
    /// Every folder is a tag; a leaf takes its nearest enclosing folder
    #[default]
    NearestFolder,
    /// Only root-level folders are tags; nested leaves inherit them
    TopLevelFolder,
}

/// Options controlling one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct ConvertOptions {
    /// Registry key derivation
    pub definition_keys: DefinitionKeyStrategy,
    /// Tag assignment
    pub tag_strategy: TagStrategy,
    /// Description of the always-present `default` tag
    pub default_tag_description: String,
    /// `info.version` of the output document
    pub api_version: String,
    /// `host` of the output document
    pub host: String,
    /// `schemes` of the output document
    pub schemes: Vec<String>,
    /// Fail the run when any item is malformed
    pub strict: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            definition_keys: DefinitionKeyStrategy::default(),
            tag_strategy: TagStrategy::default(),
            default_tag_description: "default tag".to_string(),
            api_version: "1.0.0".to_string(),
            host: String::new(),
            schemes: vec!["https".to_string(), "http".to_string()],
            strict: false,
        }
    }
}

impl ConvertOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the definition key strategy
    #[must_use]
    pub fn with_definition_keys(mut self, strategy: DefinitionKeyStrategy) -> Self {
        self.definition_keys = strategy;
        self
    }

    /// Set the tag strategy
    #[must_use]
    pub fn with_tag_strategy(mut self, strategy: TagStrategy) -> Self {
        self.tag_strategy = strategy;
        self
    }

    /// Enable/disable strict mode
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the host
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }
}

/// Load options from a YAML or JSON file
pub fn load_options(path: impl AsRef<Path>) -> Result<ConvertOptions> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read options file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_options_from_str(&content)
}

/// Load options from a YAML or JSON string
pub fn load_options_from_str(yaml: &str) -> Result<ConvertOptions> {
    serde_yaml::from_str(yaml).map_err(|e| Error::config(format!("Invalid options: {e}")))
}
