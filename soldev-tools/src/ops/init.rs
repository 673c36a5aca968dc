// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::core::project;

/// Initialize a soldev project in an existing directory.
pub fn init(path: impl AsRef<Path>) -> eyre::Result<()> {
    let path = path.as_ref();
    project::init(path)?;
    greyln!("initialized soldev project in {}", path.display());
    Ok(())
}
