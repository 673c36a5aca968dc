// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

pub mod compiler;
pub mod config;
pub mod network;
pub mod project;
