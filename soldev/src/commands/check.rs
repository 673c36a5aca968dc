// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use soldev_tools::ops;

use crate::error::SoldevResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Path to the project directory
    #[clap(default_value = ".")]
    path: PathBuf,
}

pub fn exec(args: Args) -> SoldevResult {
    ops::check(args.path)?;
    Ok(())
}
