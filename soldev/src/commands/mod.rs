// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use crate::error::SoldevResult;

mod check;
mod init;
mod networks;
mod new;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Validate the project configuration
    #[clap(visible_alias = "c")]
    Check(check::Args),
    /// Initialize a soldev project in an existing directory
    Init(init::Args),
    /// List the networks configured for the project
    Networks(networks::Args),
    /// Create a new soldev project
    New(new::Args),
}

pub fn exec(cmd: Command) -> SoldevResult {
    match cmd {
        Command::Check(args) => check::exec(args),
        Command::Init(args) => init::exec(args),
        Command::Networks(args) => networks::exec(args),
        Command::New(args) => new::exec(args),
    }
}
