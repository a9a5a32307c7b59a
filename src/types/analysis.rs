//! API types for listening profile analysis.

use serde::{Deserialize, Serialize};

use super::track::TrackRecord;

/// Request to analyze a listening history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Listening history, in play order
    pub tracks: Vec<TrackRecord>,
}

/// Aggregate statistics over a listening history.
///
/// Recomputed in full on every call; nothing here outlives the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListeningProfile {
    /// Number of plays analyzed
    pub total_tracks: usize,
    /// Distinct artist names across the history
    pub unique_artists: usize,
    /// Mean artist popularity, rounded to two decimals
    pub avg_artist_popularity: f64,
    /// Distinct genre labels across the history
    pub unique_genres: usize,
    /// Most played artists, best first, capped at five
    pub top_artists: Vec<TopArtist>,
    /// Share of plays per popularity tier
    pub popularity_distribution: PopularityDistribution,
    /// Templated summary of the dominant tier; empty for an empty history
    pub bias_summary: String,
    /// Weighted score rewarding emerging and mid-tier listening
    pub exploration_score: f64,
}

/// An artist with its play count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopArtist {
    pub artist_name: String,
    pub count: usize,
}

/// Percentage of plays in each popularity tier.
///
/// Each value is rounded independently, so the three may not sum to
/// exactly 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopularityDistribution {
    pub mainstream: f64,
    pub mid: f64,
    pub emerging: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_is_all_zero() {
        let profile = ListeningProfile::default();
        assert_eq!(profile.total_tracks, 0);
        assert_eq!(profile.unique_artists, 0);
        assert_eq!(profile.avg_artist_popularity, 0.0);
        assert!(profile.top_artists.is_empty());
        assert!(profile.bias_summary.is_empty());
        assert_eq!(profile.exploration_score, 0.0);
    }

    #[test]
    fn test_profile_serialization_field_names() {
        let profile = ListeningProfile {
            total_tracks: 2,
            unique_artists: 1,
            avg_artist_popularity: 90.0,
            unique_genres: 1,
            top_artists: vec![TopArtist {
                artist_name: "Artist 1".to_string(),
                count: 2,
            }],
            popularity_distribution: PopularityDistribution {
                mainstream: 100.0,
                mid: 0.0,
                emerging: 0.0,
            },
            bias_summary: "summary".to_string(),
            exploration_score: 10.0,
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["total_tracks"], 2);
        assert_eq!(value["popularity_distribution"]["mainstream"], 100.0);
        assert_eq!(value["top_artists"][0]["artist_name"], "Artist 1");
        assert_eq!(value["top_artists"][0]["count"], 2);
    }
}
