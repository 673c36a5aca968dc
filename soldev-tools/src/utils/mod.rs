// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use std::{fs, path::Path};

pub mod color;

/// Check if a directory exists, creating it if not.
pub fn create_dir_if_dne(path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir(path)?;
    }
    Ok(())
}
