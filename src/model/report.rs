//! Summaries of a finished tangle.

use std::fmt;
use std::path::PathBuf;

use crate::readers::WriteState;

/// Counters collected while streaming a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TangleStats {
    /// Lines read from the document, fence lines included.
    pub lines_read: usize,
    /// Lines copied to the output.
    pub lines_written: usize,
    /// Fence marker lines seen.
    pub fences: usize,
    /// State at end of input.
    pub final_state: WriteState,
    /// SHA256 of the output bytes, hex encoded.
    pub hexdigest: String,
}

impl TangleStats {
    /// Number of blocks opened, including an unterminated last one.
    pub fn blocks(&self) -> usize {
        self.fences.div_ceil(2)
    }

    /// First 12 hex digits of the output digest, for display.
    pub fn short_digest(&self) -> &str {
        self.hexdigest.get(..12).unwrap_or(&self.hexdigest)
    }

    /// Returns true if the document ended inside a block.
    pub fn is_unterminated(&self) -> bool {
        self.final_state.is_writing()
    }
}

/// Result of tangling one document to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TangleReport {
    /// The document that was read.
    pub document: PathBuf,
    /// The file that was written.
    pub output: PathBuf,
    /// Stream counters.
    pub stats: TangleStats,
}

impl fmt::Display for TangleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({} lines from {} blocks, sha256 {})",
            self.document.display(),
            self.output.display(),
            self.stats.lines_written,
            self.stats.blocks(),
            self.stats.short_digest()
        )
    }
}
