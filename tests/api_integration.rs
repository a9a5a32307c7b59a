//! Integration tests for the FairPlay HTTP API.
//!
//! Everything here runs without network access: the analysis endpoints take
//! caller-provided records and the live catalog endpoints are only exercised
//! for their refusal behavior. The full live pipeline is covered in
//! `spotify_pipeline.rs` against a stub upstream.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use fairplay::config::AppConfig;
use fairplay::server::{create_router, AppState};
use fairplay::types::{ListeningProfile, RankedRecommendations};

fn create_test_server() -> TestServer {
    let config = AppConfig::default();
    let state = AppState::new(config);
    let app = create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/health").await;
    response.assert_status_ok();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.contains("application/json"));

    let body: Value = response.json();
    // No session connected in tests: degraded, not unhealthy
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["session_connected"], false);
}

#[tokio::test]
async fn test_config_endpoint() {
    let server = create_test_server();

    let response = server.get("/api/v1/config").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["server"]["port"], 8000);
    assert_eq!(body["spotify"]["token_configured"], false);
    assert_eq!(body["spotify"]["session_connected"], false);
    // The token itself must never be echoed
    assert!(body["spotify"].get("access_token").is_none());
}

#[tokio::test]
async fn test_analyze_sample() {
    let server = create_test_server();

    let response = server.get("/api/v1/analyze/sample").await;
    response.assert_status_ok();

    let profile: ListeningProfile = response.json();
    assert_eq!(profile.total_tracks, 5);
    assert_eq!(profile.unique_artists, 3);
    assert_eq!(profile.avg_artist_popularity, 56.0);
    assert_eq!(profile.unique_genres, 5);

    assert_eq!(profile.popularity_distribution.mainstream, 40.0);
    assert_eq!(profile.popularity_distribution.mid, 40.0);
    assert_eq!(profile.popularity_distribution.emerging, 20.0);

    assert_eq!(profile.top_artists.len(), 3);
    assert_eq!(profile.top_artists[0].artist_name, "Artist 1");
    assert_eq!(profile.top_artists[0].count, 2);

    assert!(profile.bias_summary.contains("mainstream"));
    assert_eq!(profile.exploration_score, 44.0);
}

#[tokio::test]
async fn test_recommend_sample() {
    let server = create_test_server();

    let response = server.get("/api/v1/recommend/sample").await;
    response.assert_status_ok();

    let result: RankedRecommendations = response.json();
    assert_eq!(result.recommended_count, 4);
    assert_eq!(result.new_artist_rate, 100.0);
    assert_eq!(result.avg_recommended_popularity, 31.25);

    let names: Vec<&str> = result.items.iter().map(|i| i.track_name.as_str()).collect();
    // "Blue Hour" is by a familiar artist and is excluded
    assert_eq!(names, vec!["Sidequest", "Try Me", "No Rules", "Louder"]);

    assert_eq!(result.items[0].score, 6.8);
    assert_eq!(
        result.items[0].reason,
        "new artist; genre match: dance pop; emerging (10%)"
    );
}

#[tokio::test]
async fn test_analyze_posted_tracks() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({
            "tracks": [
                {"track_name": "Song A", "artist_name": "Artist 1", "artist_popularity": 90, "genres": ["pop"]},
                {"track_name": "Song B", "artist_name": "Artist 2", "artist_popularity": 10, "genres": ["noise"]}
            ]
        }))
        .await;
    response.assert_status_ok();

    let profile: ListeningProfile = response.json();
    assert_eq!(profile.total_tracks, 2);
    assert_eq!(profile.unique_artists, 2);
    assert_eq!(profile.avg_artist_popularity, 50.0);
    assert_eq!(profile.popularity_distribution.mainstream, 50.0);
    assert_eq!(profile.popularity_distribution.emerging, 50.0);
}

#[tokio::test]
async fn test_analyze_empty_history() {
    let server = create_test_server();

    let response = server.post("/api/v1/analyze").json(&json!({"tracks": []})).await;
    response.assert_status_ok();

    let profile: ListeningProfile = response.json();
    assert_eq!(profile.total_tracks, 0);
    assert!(profile.top_artists.is_empty());
    assert_eq!(profile.bias_summary, "");
    assert_eq!(profile.exploration_score, 0.0);
}

#[tokio::test]
async fn test_recommend_posted_scenario() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommend")
        .json(&json!({
            "tracks": [
                {"track_name": "Song A", "artist_name": "Artist 1", "artist_popularity": 90, "genres": ["pop"]}
            ],
            "candidates": [
                {"track_name": "New", "artist_name": "Artist 2", "artist_popularity": 10, "genres": ["pop"]},
                {"track_name": "Old", "artist_name": "Artist 1", "artist_popularity": 90, "genres": ["pop"]}
            ]
        }))
        .await;
    response.assert_status_ok();

    let result: RankedRecommendations = response.json();
    // k defaults to 5, allow_familiar to false
    assert_eq!(result.recommended_count, 1);
    assert_eq!(result.items[0].track_name, "New");
    assert_eq!(result.items[0].score, 6.8);
}

#[tokio::test]
async fn test_analyze_rejects_missing_fields() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({
            "tracks": [
                {"track_name": "Song A", "artist_name": "Artist 1", "artist_popularity": 90}
            ]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DESERIALIZATION_ERROR");
}

#[tokio::test]
async fn test_analyze_rejects_out_of_range_popularity() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/analyze")
        .json(&json!({
            "tracks": [
                {"track_name": "Song A", "artist_name": "Artist 1", "artist_popularity": 140, "genres": []}
            ]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("out of range"));
}

#[tokio::test]
async fn test_recommend_rejects_invalid_candidate() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommend")
        .json(&json!({
            "tracks": [],
            "candidates": [
                {"track_name": "C", "artist_name": "A", "artist_popularity": 101, "genres": []}
            ]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("candidate"));
}

#[tokio::test]
async fn test_spotify_endpoints_require_session() {
    let server = create_test_server();

    for path in [
        "/api/v1/spotify/analyze",
        "/api/v1/spotify/recommend",
        "/api/v1/spotify/recent",
        "/api/v1/spotify/candidates",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "SESSION_REQUIRED", "path: {path}");
    }
}

#[tokio::test]
async fn test_session_status_without_session() {
    let server = create_test_server();

    let response = server.get("/api/v1/session").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["connected"], false);
    assert_eq!(body["valid"], false);
    assert_eq!(body["user_id"], Value::Null);
}

#[tokio::test]
async fn test_session_disconnect_is_idempotent() {
    let server = create_test_server();

    let response = server.delete("/api/v1/session").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["connected"], false);
}

#[tokio::test]
async fn test_connect_rejects_empty_token() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/session")
        .json(&json!({"access_token": "   "}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = create_test_server();

    let response = server.get("/api/v1/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
