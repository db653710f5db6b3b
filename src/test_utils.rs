//! Shared test utilities.

use std::fs;
use std::path::{Path, PathBuf};

/// Joins lines into a document, each terminated by a newline.
pub fn document(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

/// Writes a document made of `lines` to `dir/name` and returns its path.
pub fn write_document(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, document(lines)).unwrap();
    path
}
