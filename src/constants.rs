/// User agent sent to the NWS API. The service rejects requests without contact details.
pub const USER_AGENT: &str = "(weather-app, contact@example.com)";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

/// Per-call timeout for upstream requests, in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Message returned to callers for any upstream failure
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch weather data";
