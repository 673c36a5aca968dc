// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] crate::core::config::ConfigError),
    #[error("{0}")]
    Network(#[from] crate::core::network::NetworkError),
    #[error("{0}")]
    Compiler(#[from] crate::core::compiler::CompilerError),
    #[error("{0}")]
    Project(#[from] crate::core::project::ProjectError),
}
