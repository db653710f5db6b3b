//! Fence marker recognition and the write-state machine.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::errors::Result;

/// Pattern for the default three-backtick fence.
///
/// Anchored at column 0; anything after the backticks (a language tag or
/// more backticks) is ignored.
static BACKTICK_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```").unwrap());

/// Recognizes fence marker lines by prefix.
#[derive(Debug, Clone)]
pub struct FenceMarker {
    pattern: Regex,
}

impl FenceMarker {
    /// Creates a matcher for lines starting with `token`.
    ///
    /// The token is matched literally. Leading whitespace on a line is not
    /// stripped, so indented fences are not markers.
    pub fn new(token: &str) -> Result<Self> {
        if token == "```" {
            return Ok(Self::default());
        }
        let pattern = Regex::new(&format!("^{}", regex::escape(token)))?;
        Ok(Self { pattern })
    }

    /// Returns true if `line` is a fence marker.
    pub fn is_marker(&self, line: &[u8]) -> bool {
        self.pattern.is_match(line)
    }
}

impl Default for FenceMarker {
    fn default() -> Self {
        Self {
            pattern: BACKTICK_FENCE.clone(),
        }
    }
}

/// Whether the tangler is currently inside a fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteState {
    /// Between blocks; lines are discarded.
    #[default]
    Outside,
    /// Inside a block; lines are written.
    Inside,
}

impl WriteState {
    /// Returns the state after seeing a fence marker.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            WriteState::Outside => WriteState::Inside,
            WriteState::Inside => WriteState::Outside,
        }
    }

    /// Returns true if lines should be written in this state.
    pub fn is_writing(self) -> bool {
        matches!(self, WriteState::Inside)
    }
}
