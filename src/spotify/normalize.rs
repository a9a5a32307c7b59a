//! Normalization of raw catalog payloads into track records.
//!
//! All defaulting lives here: an unresolved artist becomes popularity 0 with
//! no genres, missing names become "Unknown", and artist identity is carried
//! by stable catalog ids rather than display names. The analysis core never
//! sees a partially filled record.

use std::collections::{HashMap, HashSet};

use crate::analysis::ranked_counts;
use crate::types::TrackRecord;

use super::model::{ArtistObject, PlayHistoryItem, TrackObject};

/// Spotify caps batched artist lookups at 50 ids per request.
pub const ARTIST_LOOKUP_LIMIT: usize = 50;

/// Seed genres used when the history yields no genre labels at all.
pub const FALLBACK_SEED_GENRES: [&str; 3] = ["r&b", "hip-hop", "pop"];

/// Tracks present in a history page, skipping entries whose track was
/// removed upstream.
pub fn history_tracks(items: &[PlayHistoryItem]) -> Vec<&TrackObject> {
    items.iter().filter_map(|item| item.track.as_ref()).collect()
}

/// Collect primary-artist ids in first-seen order: one id per track,
/// deduplicated, empty ids skipped, capped at the batch lookup limit.
pub fn primary_artist_ids<'a>(tracks: impl IntoIterator<Item = &'a TrackObject>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ids = Vec::new();

    for track in tracks {
        let Some(artist) = track.artists.first() else {
            continue;
        };
        if artist.id.is_empty() || !seen.insert(artist.id.as_str()) {
            continue;
        }
        ids.push(artist.id.clone());
        if ids.len() == ARTIST_LOOKUP_LIMIT {
            break;
        }
    }

    ids
}

/// Index resolved artists by their catalog id.
pub fn artist_lookup(artists: &[ArtistObject]) -> HashMap<&str, &ArtistObject> {
    artists.iter().map(|artist| (artist.id.as_str(), artist)).collect()
}

/// Convert raw tracks into normalized records, joining popularity and genres
/// through the artist lookup. Tracks without a credited artist are dropped;
/// artists missing from the lookup default to popularity 0 and no genres.
pub fn normalize_tracks<'a>(
    tracks: impl IntoIterator<Item = &'a TrackObject>,
    artists: &HashMap<&str, &ArtistObject>,
) -> Vec<TrackRecord> {
    tracks
        .into_iter()
        .filter_map(|track| {
            let primary = track.artists.first()?;
            let resolved = artists.get(primary.id.as_str());
            Some(TrackRecord {
                track_name: track.name.clone(),
                artist_name: primary.name.clone(),
                artist_popularity: resolved.map_or(0, |a| a.popularity),
                genres: resolved.map_or_else(Vec::new, |a| a.genres.clone()),
            })
        })
        .collect()
}

/// Most common genres across resolved artists, ranked by count with ties in
/// first-seen order, with a fixed fallback when no artist carries genres.
pub fn top_genres(artists: &[ArtistObject], limit: usize) -> Vec<String> {
    let ranked = ranked_counts(
        artists
            .iter()
            .flat_map(|artist| artist.genres.iter().map(String::as_str)),
    );
    if ranked.is_empty() {
        return FALLBACK_SEED_GENRES.iter().map(|g| g.to_string()).collect();
    }
    ranked
        .into_iter()
        .take(limit)
        .map(|(genre, _)| genre.to_string())
        .collect()
}

/// Drop duplicate candidates sharing a case-insensitive (track, artist)
/// pair, keeping the first occurrence.
pub fn dedupe_candidates(candidates: &mut Vec<TrackRecord>) {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    candidates.retain(|candidate| {
        seen.insert((
            candidate.track_name.to_lowercase(),
            candidate.artist_name.to_lowercase(),
        ))
    });
}
