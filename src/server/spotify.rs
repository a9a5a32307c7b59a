//! Live catalog endpoints backed by the Spotify collaborator.

use axum::extract::{Query, State};
use axum::Json;

use crate::analysis;
use crate::error::AppError;
use crate::spotify::{fetch_candidate_pool, fetch_recent_history};
use crate::types::{
    CandidatePoolParams, CandidatePoolResponse, ListeningProfile, RecentAnalysisParams,
    RecentHistoryParams, RecentHistoryResponse, SpotifyRecommendParams, SpotifyRecommendResponse,
};

use super::AppState;

/// Cap on the records echoed back by the recent-history endpoint.
const HISTORY_PREVIEW_LIMIT: usize = 10;

/// History page used to seed the candidate pool endpoint.
const CANDIDATE_SEED_HISTORY_LIMIT: usize = 25;

/// Analyze the user's recently played tracks.
///
/// GET /api/v1/spotify/analyze
pub async fn analyze_recent(
    State(state): State<AppState>,
    Query(params): Query<RecentAnalysisParams>,
) -> Result<Json<ListeningProfile>, AppError> {
    let session = state.require_session().await?;
    let history = fetch_recent_history(&state.spotify, &session, params.limit).await?;
    Ok(Json(analysis::analyze(&history.tracks)))
}

/// Full discovery pipeline: history, genre-seeded candidates, then ranking.
///
/// GET /api/v1/spotify/recommend
pub async fn recommend_from_recent(
    State(state): State<AppState>,
    Query(params): Query<SpotifyRecommendParams>,
) -> Result<Json<SpotifyRecommendResponse>, AppError> {
    let session = state.require_session().await?;
    let history = fetch_recent_history(&state.spotify, &session, params.history_limit).await?;
    let mut pool = fetch_candidate_pool(&state.spotify, &session, &history.artists).await?;
    pool.candidates.truncate(params.candidate_limit);

    let profile = analysis::analyze(&history.tracks);
    let recommendations = analysis::recommend(
        &history.tracks,
        &pool.candidates,
        params.k,
        params.allow_familiar,
    );

    Ok(Json(SpotifyRecommendResponse {
        top_genres_used: pool.seed_genres,
        analysis: profile,
        recommendations,
    }))
}

/// Normalized recent history with a short preview.
///
/// GET /api/v1/spotify/recent
pub async fn recent_history(
    State(state): State<AppState>,
    Query(params): Query<RecentHistoryParams>,
) -> Result<Json<RecentHistoryResponse>, AppError> {
    let session = state.require_session().await?;
    let history = fetch_recent_history(&state.spotify, &session, params.limit).await?;

    let count = history.tracks.len();
    let mut tracks = history.tracks;
    tracks.truncate(HISTORY_PREVIEW_LIMIT);

    Ok(Json(RecentHistoryResponse { count, tracks }))
}

/// Candidate pool seeded from the user's dominant history genres.
///
/// GET /api/v1/spotify/candidates
pub async fn candidate_pool(
    State(state): State<AppState>,
    Query(params): Query<CandidatePoolParams>,
) -> Result<Json<CandidatePoolResponse>, AppError> {
    let session = state.require_session().await?;
    let history =
        fetch_recent_history(&state.spotify, &session, CANDIDATE_SEED_HISTORY_LIMIT).await?;
    let pool = fetch_candidate_pool(&state.spotify, &session, &history.artists).await?;

    let count = pool.candidates.len();
    let mut candidates = pool.candidates;
    candidates.truncate(params.limit);

    Ok(Json(CandidatePoolResponse {
        top_genres_used: pool.seed_genres,
        count,
        candidates,
    }))
}
