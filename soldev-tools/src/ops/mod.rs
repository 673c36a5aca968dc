// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

pub use check::check;
pub use init::init;
pub use networks::networks;
pub use new::new;

mod check;
mod init;
mod networks;
mod new;
