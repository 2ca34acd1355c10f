//! Configuration of the HTTP server.

use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Configuration of the HTTP server.
///
/// ```
/// use customs_axum::config::AxumConfig;
///
/// let config: AxumConfig = serde_json::from_str(r#"{ "bind_address": "127.0.0.1:3000" }"#).unwrap();
/// assert_eq!(config.bind_address.port(), 3000);
/// assert_eq!(config.body_limit, AxumConfig::default().body_limit);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AxumConfig {
    /// The address to listen on
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Largest accepted request body, in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
}

fn default_body_limit() -> usize {
    256 * 1024
}

impl Default for AxumConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            body_limit: default_body_limit(),
        }
    }
}
