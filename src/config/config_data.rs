//! Configuration data structures.

use serde::{Deserialize, Serialize};

use super::same_path::SamePathPolicy;
use crate::errors::{Result, TangleError};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Token that starts a fence marker line.
    #[serde(default = "default_fence")]
    pub fence: String,

    /// Extension of literate documents, without the dot.
    #[serde(default = "default_document_extension")]
    pub document_extension: String,

    /// Extension given to tangled output, without the dot.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Behavior when the output path would be the document itself.
    #[serde(default)]
    pub same_path: SamePathPolicy,
}

fn default_fence() -> String {
    "```".to_string()
}

fn default_document_extension() -> String {
    "md".to_string()
}

fn default_source_extension() -> String {
    "py".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fence: default_fence(),
            document_extension: default_document_extension(),
            source_extension: default_source_extension(),
            same_path: SamePathPolicy::default(),
        }
    }
}

impl Config {
    /// Checks that the configuration can drive a tangle.
    pub fn validate(&self) -> Result<()> {
        if self.fence.is_empty() {
            return Err(TangleError::Config("fence must not be empty".to_string()));
        }
        for (key, ext) in [
            ("document_extension", &self.document_extension),
            ("source_extension", &self.source_extension),
        ] {
            if ext.is_empty() {
                return Err(TangleError::Config(format!("{} must not be empty", key)));
            }
            if ext.starts_with('.') {
                return Err(TangleError::Config(format!(
                    "{} must be given without a leading dot: {:?}",
                    key, ext
                )));
            }
        }
        Ok(())
    }
}
