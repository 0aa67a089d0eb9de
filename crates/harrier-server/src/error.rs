//! Error responses for the dashboard API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use harrier_slurm::QueryError;
use serde_json::json;

/// Renders a query failure as a JSON error response.
///
/// A command that couldn't run or exited non-zero is the scheduler's
/// failure (502); output that came back but didn't parse is ours (500).
/// Either way the message lands in the body for the page to show inline.
pub struct ApiError(pub QueryError);

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_command() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        tracing::error!("query failed: {}", self.0);
        (status, Json(json!({"error": self.0.to_string()}))).into_response()
    }
}
