use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_UPSTREAM_TIMEOUT_SECS, NWS_API_BASE, USER_AGENT,
};

/// Runtime settings for the gateway.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// NWS origin; a trailing slash is ignored
    pub upstream_base_url: String,
    pub user_agent: String,
    pub upstream_timeout: Duration,
    /// `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream_base_url: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Loads settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("GATEWAY_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("GATEWAY_PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("GATEWAY_PORT is not a valid port: {port}"))?;
        }
        if let Some(base) = lookup("NWS_API_BASE_URL") {
            config.upstream_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(user_agent) = lookup("NWS_USER_AGENT") {
            if user_agent.trim().is_empty() {
                bail!("NWS_USER_AGENT must not be empty");
            }
            config.user_agent = user_agent;
        }
        if let Some(secs) = lookup("UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("UPSTREAM_TIMEOUT_SECS is not a number: {secs}"))?;
            if secs == 0 {
                bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
            }
            config.upstream_timeout = Duration::from_secs(secs);
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
            if config.allowed_origins.is_empty() {
                bail!("CORS_ALLOWED_ORIGINS must list at least one origin");
            }
        }

        config.origin_headers()?;
        Ok(config)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Allowed origins as header values. Empty when any origin is allowed.
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>> {
        if self.allows_any_origin() {
            return Ok(Vec::new());
        }
        self.allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {origin}"))
            })
            .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_public_service() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:5001");
        assert_eq!(config.upstream_base_url, "https://api.weather.gov");
        assert_eq!(config.user_agent, "(weather-app, contact@example.com)");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert!(config.allows_any_origin());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("GATEWAY_HOST", "127.0.0.1"),
            ("GATEWAY_PORT", "8080"),
            ("NWS_API_BASE_URL", "http://localhost:9000/"),
            ("NWS_USER_AGENT", "(my-app, ops@example.org)"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            (
                "CORS_ALLOWED_ORIGINS",
                "https://a.example.com, https://b.example.com",
            ),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.upstream_base_url, "http://localhost:9000");
        assert_eq!(config.user_agent, "(my-app, ops@example.org)");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert!(!config.allows_any_origin());
        assert_eq!(config.origin_headers().unwrap().len(), 2);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config_from(&[("GATEWAY_PORT", "http")]).is_err());
        assert!(config_from(&[("GATEWAY_PORT", "70000")]).is_err());
        assert!(config_from(&[("UPSTREAM_TIMEOUT_SECS", "0")]).is_err());
        assert!(config_from(&[("NWS_USER_AGENT", "  ")]).is_err());
        assert!(config_from(&[("CORS_ALLOWED_ORIGINS", " , ")]).is_err());
        assert!(config_from(&[("CORS_ALLOWED_ORIGINS", "https://bad\norigin")]).is_err());
    }
}
