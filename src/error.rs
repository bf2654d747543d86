use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::constants::UPSTREAM_FAILURE_MESSAGE;

/// Caller-supplied coordinates were missing or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Latitude and longitude are required")]
    MissingCoordinates,

    #[error("Invalid latitude or longitude")]
    InvalidCoordinates,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Either NWS call failed. The cause is logged, never returned.
    #[error("Upstream error: {0:#}")]
    Upstream(anyhow::Error),

    #[error("Not found")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::Validation(err) => {
                tracing::debug!("Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            GatewayError::Upstream(err) => {
                tracing::error!("Failed to fetch weather data: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_FAILURE_MESSAGE.to_string(),
                )
            }
            GatewayError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
