//! mdtangle - extract fenced code from markdown documents
//!
//! Reads a literate document line by line and copies every line that sits
//! inside a fenced code block into a source file next to it. `notes.md`
//! tangles to `notes.py`.
//!
//! A line starting at column 0 with three backticks is a fence marker. Each
//! marker toggles between writing and skipping; the markers themselves are
//! never copied. A document that ends inside a block still has its trailing
//! lines written.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = mdtangle::tangle(Path::new("notes.md")).unwrap();
//! assert_eq!(report.output, Path::new("notes.py"));
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Result, TangleError};
pub use interface::{tangle, Tangler};
pub use model::{TangleReport, TangleStats};

pub use commands::TangleOptions;
