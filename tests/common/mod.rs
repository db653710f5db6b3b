use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

pub fn mdtangle_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mdtangle").unwrap();
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `dir/name` and returns its path.
pub fn create_document(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
