use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::error::{GatewayError, ValidationError};
use crate::models::{Coordinate, ForecastSummary, HealthStatus, WeatherQuery};
use crate::startup::AppState;

/// `GET /weather?lat=..&lon=..`
pub async fn get_weather(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ForecastSummary>, GatewayError> {
    let Query(pairs) = pairs.map_err(|rejection| {
        tracing::debug!("Unreadable query string: {}", rejection);
        ValidationError::MissingCoordinates
    })?;
    let query = WeatherQuery::from_pairs(pairs);

    let coordinate = Coordinate::parse(query.lat.as_deref(), query.lon.as_deref())?;

    tracing::info!(
        "Getting forecast for coordinates: {}, {}",
        coordinate.latitude,
        coordinate.longitude
    );

    let summary = state
        .weather
        .current_forecast(&coordinate)
        .await
        .map_err(GatewayError::Upstream)?;

    Ok(Json(summary))
}

/// Liveness only; does not touch the NWS API.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

pub async fn not_found() -> GatewayError {
    GatewayError::NotFound
}
