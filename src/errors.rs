//! Error types for tangling.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tangle operations.
#[derive(Error, Debug)]
pub enum TangleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid UTF-8 in tangled output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Refusing to overwrite {path}: output path is the document itself")]
    SamePath { path: PathBuf },
}

/// Result type alias for tangle operations.
pub type Result<T> = std::result::Result<T, TangleError>;
