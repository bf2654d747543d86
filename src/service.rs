use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::formatters::current_summary;
use crate::models::{Coordinate, ForecastResponse, ForecastSummary, PointsResponse};

/// Client for the two-step NWS forecast lookup
#[derive(Clone)]
pub struct Weather {
    client: Arc<Client>,
    base_url: String,
}

impl Weather {
    /// Creates a new Weather client from the gateway settings
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Request failed with status: {}", response.status());
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Resolves the forecast URL for the grid cell containing `coordinate`
    pub async fn forecast_url(&self, coordinate: &Coordinate) -> Result<String> {
        let points_url = format!("{}/points/{}", self.base_url, coordinate.path_segment());

        let points = self
            .make_request::<PointsResponse>(&points_url)
            .await
            .with_context(|| format!("points lookup failed for {points_url}"))?;

        points
            .properties
            .forecast
            .with_context(|| format!("points response for {points_url} has no forecast URL"))
    }

    /// Fetches the current forecast period for `coordinate`
    pub async fn current_forecast(&self, coordinate: &Coordinate) -> Result<ForecastSummary> {
        let forecast_url = self.forecast_url(coordinate).await?;

        let forecast = self
            .make_request::<ForecastResponse>(&forecast_url)
            .await
            .with_context(|| format!("forecast lookup failed for {forecast_url}"))?;

        current_summary(forecast)
            .with_context(|| format!("forecast response from {forecast_url} has no periods"))
    }
}
