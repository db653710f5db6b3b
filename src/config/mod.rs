//! Configuration loading and management.

mod config_data;
mod config_update;
mod same_path;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::Config;
pub use config_update::ConfigUpdate;
pub use same_path::SamePathPolicy;

use crate::errors::Result;

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["mdtangle.toml", ".mdtangle.toml"];

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads a configuration update from a TOML file without merging it.
pub fn read_config_update(path: &Path) -> Result<ConfigUpdate> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let config = read_config_update(path)?.merge_into(&Config::default());
    config.validate()?;
    Ok(config)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => {
            tracing::debug!("Using configuration from {}", path.display());
            read_config_file(&path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TangleError;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdtangle.toml");
        fs::write(&config_path, "source_extension = \"rs\"").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_hidden_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".mdtangle.toml");
        fs::write(&config_path, "").unwrap();

        assert_eq!(find_config_file(dir.path()).unwrap(), config_path);
    }

    #[test]
    fn test_find_config_file_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdtangle.toml");
        fs::write(&config_path, "source_extension = \"rs\"").unwrap();

        let subdir = dir.path().join("docs").join("nested");
        fs::create_dir_all(&subdir).unwrap();

        let found = find_config_file(&subdir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdtangle.toml");
        fs::write(
            &config_path,
            r#"
fence = "~~~"
source_extension = "sh"
same_path = "refuse"
"#,
        )
        .unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.fence, "~~~");
        assert_eq!(config.source_extension, "sh");
        assert_eq!(config.document_extension, "md");
        assert_eq!(config.same_path, SamePathPolicy::Refuse);
    }

    #[test]
    fn test_read_config_file_invalid_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdtangle.toml");
        fs::write(&config_path, "fence = ").unwrap();

        let err = read_config_file(&config_path).unwrap_err();
        assert!(matches!(err, TangleError::TomlParse(_)));
    }

    #[test]
    fn test_read_config_file_rejects_empty_fence() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdtangle.toml");
        fs::write(&config_path, "fence = \"\"").unwrap();

        let err = read_config_file(&config_path).unwrap_err();
        assert!(matches!(err, TangleError::Config(_)));
    }

    #[test]
    fn test_read_config_default() {
        let dir = tempdir().unwrap();
        // Skipped when an ancestor of the temp dir carries a config file.
        if find_config_file(dir.path()).is_none() {
            let config = read_config(dir.path()).unwrap();
            assert_eq!(config, Config::default());
        }
    }
}
