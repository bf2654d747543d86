use crate::models::{ForecastResponse, ForecastSummary};

/// Condenses an NWS forecast into its current (first) period
pub fn current_summary(forecast: ForecastResponse) -> Option<ForecastSummary> {
    forecast
        .properties
        .periods
        .into_iter()
        .next()
        .map(ForecastSummary::from)
}
