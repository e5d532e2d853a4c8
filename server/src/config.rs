//! Server configuration parsed from environment variables.
//!
//! The upstream URLs are the same services the browser bundle talks to; the
//! server only uses them for the `/api/status` reachability probe. Defaults
//! match the client's build-time defaults.

use std::time::Duration;

use client::config::{DEFAULT_GEOCODER_URL, DEFAULT_ROUTING_API_URL, DEFAULT_TRAFFIC_API_URL};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATUS_PROBE_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid STATUS_PROBE_TIMEOUT_MS: {0}")]
    InvalidProbeTimeout(String),
}

/// A backend service whose reachability is reported on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    pub name: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub upstreams: Vec<Upstream>,
    pub probe_timeout: Duration,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SMARTNAV_ROUTING_API_URL`, `SMARTNAV_TRAFFIC_API_URL`,
    ///   `SMARTNAV_GEOCODER_URL`: client defaults when absent
    /// - `STATUS_PROBE_TIMEOUT_MS`: default 2000, must be positive
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let probe_timeout = match get("STATUS_PROBE_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidProbeTimeout(raw)),
            },
            None => Duration::from_millis(DEFAULT_STATUS_PROBE_TIMEOUT_MS),
        };

        let upstream = |name: &'static str, key: &str, default: &str| Upstream {
            name,
            url: get(key)
                .map(|v| v.trim().trim_end_matches('/').to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned()),
        };
        let upstreams = vec![
            upstream("routing", "SMARTNAV_ROUTING_API_URL", DEFAULT_ROUTING_API_URL),
            upstream("traffic", "SMARTNAV_TRAFFIC_API_URL", DEFAULT_TRAFFIC_API_URL),
            upstream("geocoder", "SMARTNAV_GEOCODER_URL", DEFAULT_GEOCODER_URL),
        ];

        Ok(Self { port, upstreams, probe_timeout })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
