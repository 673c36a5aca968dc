// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

//! Solidity compiler selection.

use crate::utils::color::Color;

/// Compiler release used for newly scaffolded projects.
pub const DEFAULT_VERSION: &str = "0.8.4";

const RELEASES_LINK: &str = "https://docs.soliditylang.org/en/latest/installing-solidity.html";

const FLOATING_TAGS: &[&str] = &["latest", "stable", "nightly"];

#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    #[error("compiler version {0:?} is a floating tag, pin an exact release such as {default:?}", default = DEFAULT_VERSION)]
    FloatingVersion(String),

    #[error("compiler version {version:?} is not a MAJOR.MINOR.PATCH release, see\n{link}", link = RELEASES_LINK.red())]
    MalformedVersion { version: String },
}

/// Check that a version string names an exact compiler release.
pub fn check_version(version: &str) -> Result<(), CompilerError> {
    if FLOATING_TAGS.contains(&version) {
        return Err(CompilerError::FloatingVersion(version.to_string()));
    }

    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 || !parts.iter().all(|part| is_numeric_component(part)) {
        return Err(CompilerError::MalformedVersion {
            version: version.to_string(),
        });
    }
    Ok(())
}

fn is_numeric_component(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_release_accepted() {
        check_version(DEFAULT_VERSION).unwrap();
        check_version("0.4.26").unwrap();
        check_version("0.8.30").unwrap();
    }

    #[test]
    fn test_floating_tag_rejected() {
        let err = check_version("latest").unwrap_err();
        assert!(matches!(err, CompilerError::FloatingVersion(_)));
    }

    #[test]
    fn test_partial_version_rejected() {
        assert!(check_version("0.8").is_err());
        assert!(check_version("0.8.").is_err());
        assert!(check_version("0.8.4.1").is_err());
    }

    #[test]
    fn test_non_numeric_version_rejected() {
        assert!(check_version("^0.8.4").is_err());
        assert!(check_version("0.8.4-nightly").is_err());
        assert!(check_version("").is_err());
    }
}
