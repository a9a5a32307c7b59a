//! Candidate ranking against a listening history.

use std::collections::HashSet;

use crate::types::{RankedRecommendations, RecommendationItem, TrackRecord};

use super::{round2, PopularityTier};

/// Default number of recommendations returned.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Bonus for a candidate whose artist is absent from the history.
const NOVELTY_BONUS: f64 = 3.0;

/// Genre-overlap bonus bounds: any match earns at least the minimum, three
/// or more matched genres earn the maximum.
const GENRE_MATCH_MIN: usize = 2;
const GENRE_MATCH_MAX: usize = 3;

/// Divisor mapping popularity headroom (100 - popularity) into a [0, 2] bonus.
const POPULARITY_HEADROOM_DIVISOR: f64 = 50.0;

/// Score a candidate pool against a listening history and return the top `k`.
///
/// Candidates by already-heard artists are skipped entirely unless
/// `allow_familiar` is set, in which case they are scored without the
/// novelty bonus. Each returned item carries a rationale built from the
/// applied score components, in a fixed order, so identical inputs always
/// produce identical output. `k == 0` yields an empty result.
pub fn recommend(
    tracks: &[TrackRecord],
    candidates: &[TrackRecord],
    k: usize,
    allow_familiar: bool,
) -> RankedRecommendations {
    let listened_artists: HashSet<&str> = tracks.iter().map(|t| t.artist_name.as_str()).collect();
    let liked_genres: HashSet<&str> = tracks
        .iter()
        .flat_map(|t| t.genres.iter().map(String::as_str))
        .collect();

    let mut ranked: Vec<RecommendationItem> = Vec::new();

    for candidate in candidates {
        let mut score = 0.0;
        let mut reasons: Vec<String> = Vec::new();

        if !listened_artists.contains(candidate.artist_name.as_str()) {
            score += NOVELTY_BONUS;
            reasons.push("new artist".to_string());
        } else if allow_familiar {
            reasons.push("familiar artist".to_string());
        } else {
            continue;
        }

        // Matched genres keep the candidate's original order so the
        // rationale is reproducible.
        let matched: Vec<&str> = candidate
            .genres
            .iter()
            .map(String::as_str)
            .filter(|genre| liked_genres.contains(genre))
            .collect();
        if !matched.is_empty() {
            score += matched.len().clamp(GENRE_MATCH_MIN, GENRE_MATCH_MAX) as f64;
            reasons.push(format!("genre match: {}", matched.join(", ")));
        }

        score += (100.0 - f64::from(candidate.artist_popularity)) / POPULARITY_HEADROOM_DIVISOR;
        let tier = PopularityTier::from_popularity(candidate.artist_popularity);
        reasons.push(format!("{} ({}%)", tier, candidate.artist_popularity));

        ranked.push(RecommendationItem {
            track_name: candidate.track_name.clone(),
            artist_name: candidate.artist_name.clone(),
            artist_popularity: candidate.artist_popularity,
            score: round2(score),
            reason: reasons.join("; "),
        });
    }

    // Rounded score descending, then popularity ascending (favor the less
    // exposed artist), then track name for a total order.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.artist_popularity.cmp(&b.artist_popularity))
            .then_with(|| a.track_name.cmp(&b.track_name))
    });
    ranked.truncate(k);

    let recommended_count = ranked.len();
    let new_artist_count = ranked
        .iter()
        .filter(|item| !listened_artists.contains(item.artist_name.as_str()))
        .count();
    let popularity_sum: u64 = ranked.iter().map(|i| u64::from(i.artist_popularity)).sum();

    let (new_artist_rate, avg_recommended_popularity) = if recommended_count == 0 {
        (0.0, 0.0)
    } else {
        (
            round2(new_artist_count as f64 / recommended_count as f64 * 100.0),
            round2(popularity_sum as f64 / recommended_count as f64),
        )
    };

    RankedRecommendations {
        recommended_count,
        new_artist_rate,
        avg_recommended_popularity,
        items: ranked,
    }
}
