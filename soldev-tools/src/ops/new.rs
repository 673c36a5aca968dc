// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use eyre::bail;

use crate::core::project;

/// Create a new soldev project.
pub fn new(path: impl AsRef<Path>) -> eyre::Result<()> {
    let path = path.as_ref();
    if path.exists() {
        bail!("destination {} already exists", path.display());
    }
    project::new(path)?;
    mintln!("new soldev project at {}", path.display());
    Ok(())
}
