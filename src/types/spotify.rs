//! API types for the live catalog endpoints.

use serde::{Deserialize, Serialize};

use super::analysis::ListeningProfile;
use super::recommend::RankedRecommendations;
use super::track::TrackRecord;

/// Query parameters for GET /spotify/analyze
#[derive(Debug, Clone, Deserialize)]
pub struct RecentAnalysisParams {
    /// How many recent plays to fetch and analyze
    #[serde(default = "default_analysis_limit")]
    pub limit: usize,
}

fn default_analysis_limit() -> usize {
    50
}

/// Query parameters for GET /spotify/recommend
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyRecommendParams {
    /// How many recent plays to base the analysis on
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Cap on the candidate pool fed to the ranker
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
    /// Maximum number of recommendations
    #[serde(default = "default_recommend_k")]
    pub k: usize,
    /// Include already-heard artists (default: false)
    #[serde(default)]
    pub allow_familiar: bool,
}

fn default_history_limit() -> usize {
    25
}

fn default_candidate_limit() -> usize {
    60
}

fn default_recommend_k() -> usize {
    10
}

/// Query parameters for GET /spotify/recent
#[derive(Debug, Clone, Deserialize)]
pub struct RecentHistoryParams {
    /// How many recent plays to fetch
    #[serde(default = "default_preview_limit")]
    pub limit: usize,
}

/// Query parameters for GET /spotify/candidates
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePoolParams {
    /// Cap on the candidate preview returned
    #[serde(default = "default_preview_limit")]
    pub limit: usize,
}

fn default_preview_limit() -> usize {
    25
}

/// Normalized recent history with a capped preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentHistoryResponse {
    /// Total normalized records fetched
    pub count: usize,
    /// Preview of the first records
    pub tracks: Vec<TrackRecord>,
}

/// Candidate pool preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePoolResponse {
    /// Genres used to seed the catalog searches
    pub top_genres_used: Vec<String>,
    /// Pool size before the preview cap
    pub count: usize,
    /// Preview of the first candidates
    pub candidates: Vec<TrackRecord>,
}

/// Combined discovery response: profile plus ranked recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyRecommendResponse {
    /// Genres used to seed the candidate searches
    pub top_genres_used: Vec<String>,
    pub analysis: ListeningProfile,
    pub recommendations: RankedRecommendations,
}
