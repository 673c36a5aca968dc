// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

//! Initialize soldev project directories.

use std::{fs, path::Path};

use crate::utils::create_dir_if_dne;

/// Errors which may occur from initializing soldev projects.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialize a soldev project in an existing directory.
///
/// Existing files are left untouched, so running this in an already
/// initialized project is a no-op.
pub fn init(path: impl AsRef<Path>) -> Result<(), ProjectError> {
    let path = path.as_ref();

    create_dir_if_dne(path.join("contracts"))?;
    copy_from_template_if_dne!(
        "templates/project" -> path,
        "Soldev.toml",
        "contracts/Greeter.sol",
    );

    Ok(())
}

/// Create a new soldev project at the given path.
pub fn new(path: impl AsRef<Path>) -> Result<(), ProjectError> {
    let path = path.as_ref();
    fs::create_dir_all(path)?;
    init(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ProjectConfig;

    #[test]
    fn test_init_scaffolds_project() {
        let dir = tempfile::tempdir().unwrap();
        init(dir.path()).unwrap();

        let config = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(config.solidity, "0.8.4");
        assert_eq!(config.network("ganache").unwrap().url, "http://127.0.0.1:8545");
        assert!(dir.path().join("contracts/Greeter.sol").exists());
    }

    #[test]
    fn test_init_preserves_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Soldev.toml"), "solidity = \"0.7.6\"\n").unwrap();

        init(dir.path()).unwrap();
        let config = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(config.solidity, "0.7.6");
    }

    #[test]
    fn test_new_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("my-project");

        new(&project).unwrap();
        assert!(project.join("Soldev.toml").exists());
    }
}
