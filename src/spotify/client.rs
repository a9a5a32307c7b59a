//! Thin HTTP client for the Spotify Web API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::SpotifyConfig;

use super::model::{ArtistObject, ArtistsPage, PrivateUser, RecentlyPlayedPage, SearchPage, TrackObject};
use super::session::SpotifySession;
use super::SpotifyError;

const USER_AGENT: &str = concat!("fairplay/", env!("CARGO_PKG_VERSION"));

/// Client over the Spotify Web API, holding no credential state of its own.
///
/// Every request borrows an explicit [`SpotifySession`]. A 401 from upstream
/// invalidates the borrowed session and surfaces as
/// [`SpotifyError::AuthorizationExpired`]; an already-invalidated session is
/// refused before any request goes out. The base URL is configurable so
/// tests can point the client at a stub server.
pub struct SpotifyClient {
    http: Client,
    api_base: String,
}

impl SpotifyClient {
    pub fn new(config: &SpotifyConfig) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_s))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/me`, verifying that the session token is accepted upstream.
    pub async fn current_user(&self, session: &SpotifySession) -> Result<PrivateUser, SpotifyError> {
        self.get_json(session, "/me", &[]).await
    }

    /// GET `/me/player/recently-played`.
    pub async fn recently_played(
        &self,
        session: &SpotifySession,
        limit: usize,
    ) -> Result<RecentlyPlayedPage, SpotifyError> {
        self.get_json(
            session,
            "/me/player/recently-played",
            &[("limit", limit.to_string())],
        )
        .await
    }

    /// Batch-resolve full artist objects; ids unknown upstream are dropped.
    pub async fn artists(
        &self,
        session: &SpotifySession,
        ids: &[String],
    ) -> Result<Vec<ArtistObject>, SpotifyError> {
        let page: ArtistsPage = self
            .get_json(session, "/artists", &[("ids", ids.join(","))])
            .await?;
        Ok(page.artists.into_iter().flatten().collect())
    }

    /// GET `/search?type=track` for a single query string.
    pub async fn search_tracks(
        &self,
        session: &SpotifySession,
        query: &str,
        limit: usize,
    ) -> Result<Vec<TrackObject>, SpotifyError> {
        let page: SearchPage = self
            .get_json(
                session,
                "/search",
                &[
                    ("q", query.to_string()),
                    ("type", "track".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(page.tracks.map(|t| t.items).unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &SpotifySession,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SpotifyError> {
        if !session.is_valid() {
            return Err(SpotifyError::AuthorizationExpired);
        }

        let url = format!("{}{}", self.api_base, path);
        debug!(%url, "Spotify request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(session.access_token())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            session.invalidate();
            warn!(path, "Spotify rejected the session token; session invalidated");
            return Err(SpotifyError::AuthorizationExpired);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(path, %status, "Spotify request failed");
            return Err(SpotifyError::Upstream { status, body });
        }

        Ok(response.json().await?)
    }
}
