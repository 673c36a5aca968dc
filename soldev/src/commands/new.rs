// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use soldev_tools::ops;

use crate::error::SoldevResult;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Project name or path
    path: PathBuf,
}

pub fn exec(args: Args) -> SoldevResult {
    ops::new(args.path)?;
    Ok(())
}
