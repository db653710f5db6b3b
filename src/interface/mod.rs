//! High-level interface for tangling documents.

mod tangler;

pub use tangler::{tangle, Tangler};
