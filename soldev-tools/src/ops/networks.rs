// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::{core::config::ProjectConfig, utils::color::Color};

/// List the networks configured for the project.
pub fn networks(dir: impl AsRef<Path>) -> eyre::Result<()> {
    let config = ProjectConfig::load(dir)?;
    if config.networks.is_empty() {
        greyln!("no networks configured");
        return Ok(());
    }

    let mut names: Vec<_> = config.networks.keys().collect();
    names.sort();
    for name in names {
        let network = &config.networks[name];
        match network.chain_id {
            Some(chain_id) => greyln!(
                "{} {} (chain id {})",
                name.mint(),
                network.url.lavender(),
                chain_id
            ),
            None => greyln!("{} {}", name.mint(), network.url.lavender()),
        }
    }
    Ok(())
}
