//! Custom extractors for the HTTP server.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::{ErrorDetail, ErrorResponse};

/// Rejection type for `JsonBody`
pub struct JsonBodyRejection {
    message: String,
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "DESERIALIZATION_ERROR",
                message: self.message,
            },
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Extractor for JSON request bodies.
///
/// Unlike the stock extractor this rejects with the same structured error
/// body the rest of the API uses, so records missing required fields or
/// carrying ill-typed values surface uniformly to callers.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.is_empty() && !content_type.contains("json") {
            return Err(JsonBodyRejection {
                message: format!("Invalid content type: expected application/json, got {content_type}"),
            });
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| JsonBodyRejection {
                message: format!("Failed to read request body: {e}"),
            })?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| JsonBodyRejection {
                message: format!("Failed to deserialize request: {e}"),
            })
    }
}
