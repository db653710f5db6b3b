//! Policy for documents whose output path is the document itself.

use serde::{Deserialize, Serialize};

/// What to do when the derived output path equals the document path.
///
/// This happens when the document does not end in the document extension,
/// so the suffix substitution leaves the path unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamePathPolicy {
    /// Replace the document with its own extracted code.
    #[default]
    Overwrite,

    /// Fail before touching any file.
    Refuse,
}

impl SamePathPolicy {
    /// Returns true if tangling may replace the document.
    pub fn allows_overwrite(&self) -> bool {
        matches!(self, SamePathPolicy::Overwrite)
    }
}
