// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::Path};

use serde::de::DeserializeOwned;

pub use project::ProjectConfig;

pub mod project;

/// Filename for Soldev.toml configuration files
pub const FILENAME: &str = "Soldev.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing Soldev.toml")]
    Missing,

    #[error("no network named {0:?} is configured")]
    UnknownNetwork(String),
}

pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    if !path.as_ref().exists() {
        return Err(ConfigError::Missing);
    }

    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}
