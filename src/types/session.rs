//! API types for session lifecycle operations.

use serde::{Deserialize, Serialize};

/// Request to connect a session from an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectSessionRequest {
    /// OAuth access token obtained out of band
    pub access_token: String,
}

/// Session state as reported to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    /// Whether a session is connected
    pub connected: bool,
    /// Whether the connected session is still authorized upstream
    pub valid: bool,
    /// Spotify user id the session was verified for, when known
    pub user_id: Option<String>,
}
