//! Analysis and ranking endpoints over caller-provided records.

use axum::Json;

use crate::analysis;
use crate::error::AppError;
use crate::types::{
    AnalyzeRequest, ListeningProfile, RankedRecommendations, RecommendRequest, TrackRecord,
};

use super::extractors::JsonBody;

fn validate_records(label: &str, records: &[TrackRecord]) -> Result<(), AppError> {
    for record in records {
        if let Err(reason) = record.validate() {
            return Err(AppError::BadRequest(format!("Invalid {label} record: {reason}")));
        }
    }
    Ok(())
}

/// Analyze a caller-provided listening history.
///
/// POST /api/v1/analyze
pub async fn analyze_tracks(
    JsonBody(request): JsonBody<AnalyzeRequest>,
) -> Result<Json<ListeningProfile>, AppError> {
    validate_records("track", &request.tracks)?;
    Ok(Json(analysis::analyze(&request.tracks)))
}

/// Rank caller-provided candidates against a listening history.
///
/// POST /api/v1/recommend
pub async fn recommend_tracks(
    JsonBody(request): JsonBody<RecommendRequest>,
) -> Result<Json<RankedRecommendations>, AppError> {
    validate_records("track", &request.tracks)?;
    validate_records("candidate", &request.candidates)?;
    Ok(Json(analysis::recommend(
        &request.tracks,
        &request.candidates,
        request.k,
        request.allow_familiar,
    )))
}

/// Analyze the built-in sample history.
///
/// GET /api/v1/analyze/sample
pub async fn analyze_sample() -> Json<ListeningProfile> {
    Json(analysis::analyze(&sample_history()))
}

/// Rank the built-in sample candidates against the sample history.
///
/// GET /api/v1/recommend/sample
pub async fn recommend_sample() -> Json<RankedRecommendations> {
    Json(analysis::recommend(
        &sample_history(),
        &sample_candidates(),
        analysis::DEFAULT_RECOMMENDATION_LIMIT,
        false,
    ))
}

fn record(track: &str, artist: &str, popularity: u8, genres: &[&str]) -> TrackRecord {
    TrackRecord {
        track_name: track.to_string(),
        artist_name: artist.to_string(),
        artist_popularity: popularity,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// Fixture history for exploring the API without a connected session.
fn sample_history() -> Vec<TrackRecord> {
    vec![
        record("Song A", "Artist 1", 90, &["pop", "dance pop"]),
        record("Song B", "Artist 1", 90, &["pop"]),
        record("Song C", "Artist 2", 40, &["alt", "indie"]),
        record("Song D", "Artist 3", 20, &["hip hop"]),
        record("Song E", "Artist 2", 40, &["indie"]),
    ]
}

fn sample_candidates() -> Vec<TrackRecord> {
    vec![
        record("Try Me", "Artist 4", 15, &["indie", "alt"]),
        record("Louder", "Artist 5", 75, &["pop"]),
        record("No Rules", "Artist 6", 25, &["hip hop"]),
        record("Blue Hour", "Artist 2", 40, &["indie"]),
        record("Sidequest", "Artist 7", 10, &["dance pop"]),
    ]
}
