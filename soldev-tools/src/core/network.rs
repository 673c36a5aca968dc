// Copyright 2026, Soldev Labs
// For licensing, see https://github.com/soldev-rs/soldev/blob/main/licenses/COPYRIGHT.md

use serde::{Deserialize, Serialize};
use url::Url;

/// Endpoint served by local development nodes such as ganache or anvil.
pub const LOCAL_ENDPOINT: &str = "http://127.0.0.1:8545";

const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// Connection parameters for a named JSON-RPC network.
///
/// A network record contains at least `url`; extra keys are allowed so that
/// consumers can attach their own settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint of the node.
    pub url: String,
    /// Chain id expected when connecting to the node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid endpoint {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("endpoint scheme {scheme:?} is not supported, expected one of {schemes:?}", schemes = SUPPORTED_SCHEMES)]
    UnsupportedScheme { scheme: String },
}

/// Check that an endpoint is a well-formed JSON-RPC URL.
///
/// The supported schemes are all "special" in the WHATWG sense, so a parsed
/// URL is already guaranteed to carry a host.
pub fn check_endpoint(endpoint: &str) -> Result<Url, NetworkError> {
    let url = Url::parse(endpoint).map_err(|source| NetworkError::InvalidUrl {
        url: endpoint.to_string(),
        source,
    })?;
    if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
        return Err(NetworkError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_endpoint_accepted() {
        let url = check_endpoint(LOCAL_ENDPOINT).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8545/");
        assert_eq!(url.host_str(), Some("127.0.0.1"));
    }

    #[test]
    fn test_websocket_endpoint_accepted() {
        check_endpoint("wss://mainnet.example.org/ws").unwrap();
    }

    #[test]
    fn test_schemeless_endpoint_rejected() {
        let err = check_endpoint("127.0.0.1:8545").unwrap_err();
        assert!(matches!(err, NetworkError::InvalidUrl { .. }));
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        let err = check_endpoint("file:///tmp/node.ipc").unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedScheme { scheme } if scheme == "file"));
    }

    #[test]
    fn test_hostless_endpoint_rejected() {
        assert!(check_endpoint("http://").is_err());
    }
}
