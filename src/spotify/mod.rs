//! Spotify Web API collaborator.
//!
//! Everything that touches the network lives here: the explicit session
//! object, the HTTP client, the raw payload models, and the normalizer that
//! shapes upstream data into track records. The analysis core consumes the
//! normalized records and never sees this module's error type.

mod catalog;
mod client;
pub mod model;
pub mod normalize;
mod session;

pub use catalog::{fetch_candidate_pool, fetch_recent_history, CandidatePool, RecentHistory};
pub use client::SpotifyClient;
pub use session::SpotifySession;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the Spotify collaborator.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("No Spotify session connected; connect a session with an access token first")]
    NotConnected,

    #[error("Spotify session is no longer authorized; connect a new session to continue")]
    AuthorizationExpired,

    #[error("Spotify request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Spotify returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}
