//! Configuration management for the FairPlay API.
//!
//! Loads from environment variables with the `FAIRPLAY_` prefix and `__` as
//! the section separator (e.g. `FAIRPLAY_SERVER__PORT=9000`,
//! `FAIRPLAY_SPOTIFY__ACCESS_TOKEN=...`). Every field has a default, so the
//! service starts with no environment at all.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Spotify Web API configuration
    #[serde(default)]
    pub spotify: SpotifyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            spotify: SpotifyConfig::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid host/port configuration")
    }
}

/// Spotify Web API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyConfig {
    /// Base URL for the Spotify Web API; override to point at a stub in tests
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Access token installed as a session at startup. Sessions are normally
    /// connected through the API; this is a bootstrap convenience.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            access_token: None,
            timeout_s: default_timeout_s(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_api_base() -> String {
    "https://api.spotify.com/v1".to_string()
}

fn default_timeout_s() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("FAIRPLAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.spotify.api_base, "https://api.spotify.com/v1");
        assert!(config.spotify.access_token.is_none());
        assert_eq!(config.spotify.timeout_s, 30);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_config_deserialization_with_partial_sections() {
        let json = r#"{"server": {"port": 8096}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.port, 8096);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.spotify.api_base, "https://api.spotify.com/v1");
    }
}
