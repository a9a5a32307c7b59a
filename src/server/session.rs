//! Session lifecycle endpoints.
//!
//! Access tokens are obtained out of band (OAuth is not this service's job)
//! and connected here. A session stays connected until it is explicitly
//! disconnected or upstream rejects its token; it is never refreshed behind
//! the caller's back.

use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::error::AppError;
use crate::spotify::SpotifySession;
use crate::types::{ConnectSessionRequest, SessionStatusResponse};

use super::extractors::JsonBody;
use super::AppState;

/// Connect a session from a caller-provided access token.
///
/// The token is verified against `/me` before the session is installed, so
/// a connected session is known to have been authorized at least once.
///
/// POST /api/v1/session
pub async fn connect(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ConnectSessionRequest>,
) -> Result<Json<SessionStatusResponse>, AppError> {
    if request.access_token.trim().is_empty() {
        return Err(AppError::BadRequest("access_token must not be empty".to_string()));
    }

    let candidate = SpotifySession::new(request.access_token);
    let user = state.spotify.current_user(&candidate).await?;
    let session = candidate.with_user(user.id.clone());

    state.connect_session(session).await;
    info!(user_id = %user.id, "Spotify session connected");

    Ok(Json(SessionStatusResponse {
        connected: true,
        valid: true,
        user_id: Some(user.id),
    }))
}

/// Report the current session state.
///
/// GET /api/v1/session
pub async fn status(State(state): State<AppState>) -> Json<SessionStatusResponse> {
    match state.current_session().await {
        Some(session) => Json(SessionStatusResponse {
            connected: true,
            valid: session.is_valid(),
            user_id: session.user_id().map(str::to_string),
        }),
        None => Json(SessionStatusResponse {
            connected: false,
            valid: false,
            user_id: None,
        }),
    }
}

/// Disconnect and drop the current session.
///
/// DELETE /api/v1/session
pub async fn disconnect(State(state): State<AppState>) -> Json<SessionStatusResponse> {
    if state.clear_session().await {
        info!("Spotify session disconnected");
    }

    Json(SessionStatusResponse {
        connected: false,
        valid: false,
        user_id: None,
    })
}
