// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::{
    core::{compiler, config::ProjectConfig, network},
    utils::color::Color,
};

/// Validate the project configuration in the given directory.
pub fn check(dir: impl AsRef<Path>) -> eyre::Result<()> {
    let config = ProjectConfig::load(dir)?;

    compiler::check_version(&config.solidity)?;
    greyln!("solidity compiler: {}", config.solidity.mint());

    let mut names: Vec<_> = config.networks.keys().collect();
    names.sort();
    for name in names {
        let endpoint = &config.networks[name].url;
        debug!(@grey, "checking endpoint {endpoint}");
        let url = network::check_endpoint(endpoint)?;
        greyln!("network {}: {}", name.mint(), url.as_str().lavender());
    }

    Ok(())
}
