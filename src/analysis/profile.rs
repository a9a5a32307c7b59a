//! Listening profile statistics over play history.

use std::collections::HashSet;

use crate::types::{ListeningProfile, PopularityDistribution, TopArtist, TrackRecord};

use super::{ranked_counts, round2, PopularityTier};

/// Maximum number of artists reported in a profile.
const TOP_ARTISTS_LIMIT: usize = 5;

/// Exploration score weights per tier share. Fixed: comparisons between
/// profiles depend on these staying put.
const EMERGING_WEIGHT: f64 = 1.0;
const MID_WEIGHT: f64 = 0.5;
const MAINSTREAM_WEIGHT: f64 = 0.1;

/// Reduce a listening history into aggregate statistics.
///
/// A single pass accumulates per-artist play counts, the distinct genre set,
/// the popularity sum, and per-tier play counts. Derived floats are rounded
/// half away from zero to two decimals; tier percentages are rounded
/// independently, so they may not sum to exactly 100. An empty history
/// yields an all-zero profile rather than an error.
pub fn analyze(tracks: &[TrackRecord]) -> ListeningProfile {
    if tracks.is_empty() {
        return ListeningProfile::default();
    }

    let mut unique_genres: HashSet<&str> = HashSet::new();
    let mut popularity_sum: u64 = 0;
    let mut mainstream_count = 0usize;
    let mut mid_count = 0usize;
    let mut emerging_count = 0usize;

    for track in tracks {
        popularity_sum += u64::from(track.artist_popularity);
        for genre in &track.genres {
            unique_genres.insert(genre.as_str());
        }
        match PopularityTier::from_popularity(track.artist_popularity) {
            PopularityTier::Mainstream => mainstream_count += 1,
            PopularityTier::Mid => mid_count += 1,
            PopularityTier::Emerging => emerging_count += 1,
        }
    }

    let artist_counts = ranked_counts(tracks.iter().map(|t| t.artist_name.as_str()));
    let unique_artists = artist_counts.len();
    let top_artists = artist_counts
        .into_iter()
        .take(TOP_ARTISTS_LIMIT)
        .map(|(artist_name, count)| TopArtist {
            artist_name: artist_name.to_string(),
            count,
        })
        .collect();

    let total = tracks.len();
    let tier_pct = |count: usize| round2(count as f64 / total as f64 * 100.0);
    let mainstream_pct = tier_pct(mainstream_count);
    let mid_pct = tier_pct(mid_count);
    let emerging_pct = tier_pct(emerging_count);

    let (dominant, dominant_pct) = dominant_tier(mainstream_pct, mid_pct, emerging_pct);

    ListeningProfile {
        total_tracks: total,
        unique_artists,
        avg_artist_popularity: round2(popularity_sum as f64 / total as f64),
        unique_genres: unique_genres.len(),
        top_artists,
        popularity_distribution: PopularityDistribution {
            mainstream: mainstream_pct,
            mid: mid_pct,
            emerging: emerging_pct,
        },
        bias_summary: bias_summary(dominant, dominant_pct),
        exploration_score: round2(
            emerging_pct * EMERGING_WEIGHT
                + mid_pct * MID_WEIGHT
                + mainstream_pct * MAINSTREAM_WEIGHT,
        ),
    }
}

/// Pick the tier with the highest share. Exact ties resolve by the fixed
/// priority mainstream > mid > emerging.
fn dominant_tier(mainstream: f64, mid: f64, emerging: f64) -> (PopularityTier, f64) {
    let mut dominant = (PopularityTier::Mainstream, mainstream);
    for candidate in [(PopularityTier::Mid, mid), (PopularityTier::Emerging, emerging)] {
        if candidate.1 > dominant.1 {
            dominant = candidate;
        }
    }
    dominant
}

fn bias_summary(tier: PopularityTier, pct: f64) -> String {
    match tier {
        PopularityTier::Mainstream => format!(
            "Your listening heavily favors mainstream artists ({pct}%), \
             which may limit discovery of emerging artists."
        ),
        PopularityTier::Mid => format!(
            "Your listening is fairly balanced but leans toward familiar artists ({pct}%)."
        ),
        PopularityTier::Emerging => format!(
            "Your listening strongly supports emerging artists ({pct}%) and musical exploration."
        ),
    }
}
