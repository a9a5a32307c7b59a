//! HTTP server setup and routing.

mod analysis;
mod extractors;
mod routes;
mod session;
mod spotify;

use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::spotify::{SpotifyClient, SpotifyError, SpotifySession};

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Catalog client; holds no credential state of its own
    pub spotify: Arc<SpotifyClient>,
    /// Single session slot, swapped atomically on connect/disconnect
    session: Arc<RwLock<Option<Arc<SpotifySession>>>>,
    /// Server start time for uptime reporting
    started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let spotify = Arc::new(SpotifyClient::new(&config.spotify));
        Self {
            config: Arc::new(config),
            spotify,
            session: Arc::new(RwLock::new(None)),
            started_at: Instant::now(),
        }
    }

    /// Create state with a session already connected.
    pub fn with_session(config: AppConfig, session: SpotifySession) -> Self {
        let spotify = Arc::new(SpotifyClient::new(&config.spotify));
        Self {
            config: Arc::new(config),
            spotify,
            session: Arc::new(RwLock::new(Some(Arc::new(session)))),
            started_at: Instant::now(),
        }
    }

    /// Whether a session is currently connected.
    pub async fn has_session(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Swap in a new session, replacing any existing one.
    pub async fn connect_session(&self, session: SpotifySession) {
        let mut guard = self.session.write().await;
        *guard = Some(Arc::new(session));
    }

    /// Drop the current session. Returns whether one was connected.
    pub async fn clear_session(&self) -> bool {
        self.session.write().await.take().is_some()
    }

    /// Current session, if any.
    pub async fn current_session(&self) -> Option<Arc<SpotifySession>> {
        self.session.read().await.clone()
    }

    /// Current session, or an explicit authorization error for the caller.
    pub async fn require_session(&self) -> Result<Arc<SpotifySession>, AppError> {
        self.current_session()
            .await
            .ok_or(AppError::Spotify(SpotifyError::NotConnected))
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Service endpoints
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Analysis core over caller-provided records
        .route("/analyze", post(analysis::analyze_tracks))
        .route("/analyze/sample", get(analysis::analyze_sample))
        .route("/recommend", post(analysis::recommend_tracks))
        .route("/recommend/sample", get(analysis::recommend_sample))
        // Session lifecycle
        .route(
            "/session",
            post(session::connect)
                .get(session::status)
                .delete(session::disconnect),
        )
        // Live catalog endpoints
        .route("/spotify/analyze", get(spotify::analyze_recent))
        .route("/spotify/recommend", get(spotify::recommend_from_recent))
        .route("/spotify/recent", get(spotify::recent_history))
        .route("/spotify/candidates", get(spotify::candidate_pool));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
