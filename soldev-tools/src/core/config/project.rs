// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::{
    compiler, network,
    network::{NetworkConfig, LOCAL_ENDPOINT},
};

use super::{load, ConfigError, FILENAME};

/// Project configuration declared in Soldev.toml.
///
/// Loaded once at tool startup and never mutated. Unknown top-level keys are
/// rejected so that typos like `network` do not silently disable validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Semantic version of the Solidity compiler release to invoke.
    pub solidity: String,
    /// Named JSON-RPC networks available to the project.
    #[serde(default)]
    pub networks: HashMap<String, NetworkConfig>,
}

impl ProjectConfig {
    /// Load the configuration from a project directory.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load(dir.as_ref().join(FILENAME))
    }

    /// Look up a network by name.
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    /// Validate the compiler version and every network endpoint.
    pub fn validate(&self) -> crate::Result<()> {
        compiler::check_version(&self.solidity)?;
        for network in self.networks.values() {
            network::check_endpoint(&network.url)?;
        }
        Ok(())
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let networks = HashMap::from([(
            "ganache".to_string(),
            NetworkConfig {
                url: LOCAL_ENDPOINT.to_string(),
                chain_id: None,
            },
        )]);
        Self {
            solidity: compiler::DEFAULT_VERSION.to_string(),
            networks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECLARATION: &str = r#"
solidity = "0.8.4"

[networks.ganache]
url = "http://127.0.0.1:8545"
"#;

    #[test]
    fn test_load_declaration() {
        let config: ProjectConfig = toml::from_str(DECLARATION).unwrap();
        assert_eq!(config.solidity, "0.8.4");
        assert_eq!(config.networks.len(), 1);
        assert_eq!(config.network("ganache").unwrap().url, "http://127.0.0.1:8545");
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result: Result<ProjectConfig, _> = toml::from_str(
            r#"
solidity = "0.8.4"
plugins = ["ganache"]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_network_lookup() {
        let config: ProjectConfig = toml::from_str(DECLARATION).unwrap();
        let err = config.network("sepolia").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownNetwork(name) if name == "sepolia"));
    }

    #[test]
    fn test_networks_default_to_empty() {
        let config: ProjectConfig = toml::from_str(r#"solidity = "0.8.4""#).unwrap();
        assert!(config.networks.is_empty());
    }

    #[test]
    fn test_default_matches_declaration() {
        let default = toml::to_string(&ProjectConfig::default()).unwrap();
        let config: ProjectConfig = toml::from_str(&default).unwrap();
        assert_eq!(config.solidity, "0.8.4");
        assert_eq!(config.network("ganache").unwrap().url, "http://127.0.0.1:8545");
    }

    #[test]
    fn test_validate_declaration() {
        let config: ProjectConfig = toml::from_str(DECLARATION).unwrap();
        config.validate().unwrap();

        let mut config = config;
        config.solidity = "latest".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing));
    }
}
