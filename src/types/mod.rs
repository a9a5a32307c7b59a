//! Shared types for the FairPlay API.
//!
//! Request/response types exchanged between the HTTP layer, the Spotify
//! collaborator, and the analysis core.

pub mod analysis;
pub mod recommend;
pub mod session;
pub mod spotify;
pub mod track;

use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use recommend::*;
pub use session::*;
pub use spotify::*;
pub use track::*;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Whether a Spotify session is currently connected
    pub session_connected: bool,
    pub uptime_seconds: u64,
}

/// Health status indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Configuration response (subset of config safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub server: ServerInfo,
    pub spotify: SpotifyInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyInfo {
    pub api_base: String,
    /// Whether an access token was provided via configuration
    pub token_configured: bool,
    /// Whether a session is currently connected
    pub session_connected: bool,
}
