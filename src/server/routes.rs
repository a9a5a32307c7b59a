//! Service-level route handlers.

use axum::extract::State;
use axum::Json;

use crate::types::{ConfigResponse, HealthResponse, HealthStatus, ServerInfo, SpotifyInfo};

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let session_connected = state.has_session().await;

    // Degraded without a session: analysis over posted records still works,
    // live catalog endpoints will refuse.
    let status = if session_connected {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        version: VERSION.to_string(),
        session_connected,
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Configuration endpoint
///
/// GET /api/v1/config
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let session_connected = state.has_session().await;
    let config = &state.config;

    Json(ConfigResponse {
        server: ServerInfo {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        spotify: SpotifyInfo {
            api_base: config.spotify.api_base.clone(),
            token_configured: config.spotify.access_token.is_some(),
            session_connected,
        },
    })
}
