//! Readers for scanning literate documents.

mod fence;
mod lines;

pub use fence::{FenceMarker, WriteState};
pub use lines::RawLines;
