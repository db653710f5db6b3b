//! Data model: output paths and tangle reports.

mod output_path;
mod report;

pub use output_path::{derive_output_path, is_same_path};
pub use report::{TangleReport, TangleStats};
