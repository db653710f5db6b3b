//! Configuration update and merging.

use serde::{Deserialize, Serialize};

use super::config_data::Config;
use super::same_path::SamePathPolicy;

/// Partial configuration update that can be merged into a Config.
///
/// All fields are optional. Only specified fields will override the base config.
/// Config files are read as updates over the defaults, and command line flags
/// are applied as a second update on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub fence: Option<String>,

    #[serde(default)]
    pub document_extension: Option<String>,

    #[serde(default)]
    pub source_extension: Option<String>,

    #[serde(default)]
    pub same_path: Option<SamePathPolicy>,
}

impl ConfigUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.fence.is_none()
            && self.document_extension.is_none()
            && self.source_extension.is_none()
            && self.same_path.is_none()
    }

    /// Merges this update into a base configuration, returning a new Config.
    ///
    /// Consumes `self` so fields can be moved instead of cloned.
    pub fn merge_into(self, base: &Config) -> Config {
        Config {
            fence: self.fence.unwrap_or_else(|| base.fence.clone()),
            document_extension: self
                .document_extension
                .unwrap_or_else(|| base.document_extension.clone()),
            source_extension: self
                .source_extension
                .unwrap_or_else(|| base.source_extension.clone()),
            same_path: self.same_path.unwrap_or(base.same_path),
        }
    }
}

impl From<ConfigUpdate> for Config {
    fn from(update: ConfigUpdate) -> Self {
        update.merge_into(&Config::default())
    }
}
