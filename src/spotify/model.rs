//! Raw Spotify Web API payload shapes.
//!
//! Only the fields the normalizer consumes are modeled; the rest of each
//! upstream payload is ignored. Fields Spotify omits on sparse catalog
//! entries are defaulted here so deserialization never fails on partial
//! data — the normalizer decides what the defaults mean.

use serde::Deserialize;

fn unknown() -> String {
    "Unknown".to_string()
}

/// Page returned by `/me/player/recently-played`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedPage {
    #[serde(default)]
    pub items: Vec<PlayHistoryItem>,
}

/// One play-history entry; the track can be absent for removed content.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayHistoryItem {
    #[serde(default)]
    pub track: Option<TrackObject>,
}

/// Track as returned inside history items and search results.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

/// Slim artist reference credited on a track.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: String,
    #[serde(default = "unknown")]
    pub name: String,
}

/// Full artist object from `/artists`, carrying popularity and genres.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistObject {
    #[serde(default)]
    pub id: String,
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Envelope for `/artists`; unknown ids come back as nulls.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsPage {
    #[serde(default)]
    pub artists: Vec<Option<ArtistObject>>,
}

/// Envelope for `/search?type=track`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<TrackObject>,
}

/// Current user from `/me`, used to verify a session token.
#[derive(Debug, Clone, Deserialize)]
pub struct PrivateUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_track_defaults() {
        let track: TrackObject = serde_json::from_str("{}").unwrap();
        assert_eq!(track.name, "Unknown");
        assert!(track.artists.is_empty());
    }

    #[test]
    fn test_sparse_artist_defaults() {
        let artist: ArtistObject = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(artist.id, "abc");
        assert_eq!(artist.name, "Unknown");
        assert_eq!(artist.popularity, 0);
        assert!(artist.genres.is_empty());
    }

    #[test]
    fn test_artists_page_keeps_nulls() {
        let page: ArtistsPage =
            serde_json::from_str(r#"{"artists": [null, {"id": "a1", "name": "Artist"}]}"#).unwrap();
        assert_eq!(page.artists.len(), 2);
        assert!(page.artists[0].is_none());
        assert_eq!(page.artists[1].as_ref().unwrap().id, "a1");
    }

    #[test]
    fn test_search_page_without_tracks() {
        let page: SearchPage = serde_json::from_str("{}").unwrap();
        assert!(page.tracks.is_none());
    }
}
