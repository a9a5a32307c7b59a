//! API types for recommendation ranking.

use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_RECOMMENDATION_LIMIT;

use super::track::TrackRecord;

/// Request to rank candidate tracks against a listening history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Listening history
    pub tracks: Vec<TrackRecord>,
    /// Candidate pool to score
    pub candidates: Vec<TrackRecord>,
    /// Maximum number of results (default: 5)
    #[serde(default = "default_k")]
    pub k: usize,
    /// Include already-heard artists in the results (default: false)
    #[serde(default)]
    pub allow_familiar: bool,
}

fn default_k() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}

/// Ranked recommendations with summary statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankedRecommendations {
    /// Number of items returned
    pub recommended_count: usize,
    /// Percentage of returned items by artists absent from the history
    pub new_artist_rate: f64,
    /// Mean popularity across returned items
    pub avg_recommended_popularity: f64,
    /// Ranked items, best first
    pub items: Vec<RecommendationItem>,
}

/// A scored recommendation with its rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub track_name: String,
    pub artist_name: String,
    pub artist_popularity: u8,
    /// Composite score, rounded to two decimals
    pub score: f64,
    /// Scoring rationale fragments joined with "; "
    pub reason: String,
}
