//! Explicit Spotify session state.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// A bearer session for the Spotify Web API.
///
/// Created when a caller connects with an access token and passed by
/// reference into every upstream call. The first 401 from upstream flips the
/// invalidation flag; after that every use surfaces a re-authorization error
/// until a fresh session is connected. There is no implicit refresh.
pub struct SpotifySession {
    access_token: String,
    user_id: Option<String>,
    invalidated: AtomicBool,
}

impl SpotifySession {
    pub fn new(access_token: String) -> Self {
        Self {
            access_token,
            user_id: None,
            invalidated: AtomicBool::new(false),
        }
    }

    /// Attach the verified user identity after a successful authorization
    /// check.
    pub fn with_user(mut self, user_id: String) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Spotify user id the session was verified for, when known.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Whether the session is still usable.
    pub fn is_valid(&self) -> bool {
        !self.invalidated.load(Ordering::Relaxed)
    }

    /// Mark the session unusable after upstream rejected its token.
    pub(crate) fn invalidate(&self) {
        self.invalidated.store(true, Ordering::Relaxed);
    }
}

// The token must never reach logs or error output.
impl fmt::Debug for SpotifySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifySession")
            .field("user_id", &self.user_id)
            .field("valid", &self.is_valid())
            .finish_non_exhaustive()
    }
}
