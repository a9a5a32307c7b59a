//! Assembly of normalized listening history and candidate pools.

use tracing::debug;

use crate::types::TrackRecord;

use super::client::SpotifyClient;
use super::model::ArtistObject;
use super::normalize;
use super::session::SpotifySession;
use super::SpotifyError;

/// Number of genre seeds taken from the history when building candidates.
const SEED_GENRE_COUNT: usize = 3;

/// Page size for each per-genre catalog search.
const SEARCH_PAGE_LIMIT: usize = 20;

/// Normalized listening history, with the resolved primary artists kept for
/// genre seeding.
#[derive(Debug)]
pub struct RecentHistory {
    pub tracks: Vec<TrackRecord>,
    pub artists: Vec<ArtistObject>,
}

/// Candidate pool built from genre-seeded catalog searches. Deduplicated but
/// not capped: callers apply their own limit.
#[derive(Debug)]
pub struct CandidatePool {
    pub seed_genres: Vec<String>,
    pub candidates: Vec<TrackRecord>,
}

/// Fetch and normalize a user's recently played tracks.
pub async fn fetch_recent_history(
    client: &SpotifyClient,
    session: &SpotifySession,
    limit: usize,
) -> Result<RecentHistory, SpotifyError> {
    let page = client.recently_played(session, limit).await?;
    let raw_tracks = normalize::history_tracks(&page.items);

    let ids = normalize::primary_artist_ids(raw_tracks.iter().copied());
    let artists = if ids.is_empty() {
        Vec::new()
    } else {
        client.artists(session, &ids).await?
    };

    let lookup = normalize::artist_lookup(&artists);
    let tracks = normalize::normalize_tracks(raw_tracks.iter().copied(), &lookup);
    debug!(
        plays = page.items.len(),
        tracks = tracks.len(),
        artists = artists.len(),
        "Normalized listening history"
    );

    Ok(RecentHistory { tracks, artists })
}

/// Build a candidate pool from the genres dominating the given artists.
///
/// One search page per seed genre; results are re-joined with full artist
/// objects, then deduplicated case-insensitively by (track, artist).
pub async fn fetch_candidate_pool(
    client: &SpotifyClient,
    session: &SpotifySession,
    seed_artists: &[ArtistObject],
) -> Result<CandidatePool, SpotifyError> {
    let seed_genres = normalize::top_genres(seed_artists, SEED_GENRE_COUNT);

    let mut raw = Vec::new();
    for genre in &seed_genres {
        let query = format!("genre:\"{genre}\"");
        raw.extend(client.search_tracks(session, &query, SEARCH_PAGE_LIMIT).await?);
    }

    let ids = normalize::primary_artist_ids(raw.iter());
    let artists = if ids.is_empty() {
        Vec::new()
    } else {
        client.artists(session, &ids).await?
    };

    let lookup = normalize::artist_lookup(&artists);
    let mut candidates = normalize::normalize_tracks(raw.iter(), &lookup);
    normalize::dedupe_candidates(&mut candidates);
    debug!(
        seeds = ?seed_genres,
        candidates = candidates.len(),
        "Assembled candidate pool"
    );

    Ok(CandidatePool {
        seed_genres,
        candidates,
    })
}
