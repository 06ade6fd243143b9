//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors returned by the JSON API.
#[derive(Debug)]
pub enum ApiError {
    /// No row with this id is displayed.
    SensorNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::SensorNotFound(id) => (StatusCode::NOT_FOUND, format!("sensor {id:?} not found")),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Errors returned by dashboard pages.
#[derive(Debug)]
pub enum DashboardError {
    Render(askama::Error),
}

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            Self::Render(err) => {
                tracing::error!(error = %err, "template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
