//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime environment, so upstream endpoints and
//! map options are baked in with `option_env!` when the WASM is compiled.
//! Missing or unparsable values fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use mapkit::{Coordinate, TileProvider};

pub const DEFAULT_ROUTING_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TRAFFIC_API_URL: &str = "https://sns-backend2.onrender.com";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_MAP_PROVIDER: &str = "OSM";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Map center used before the device location is known (New Delhi).
pub const DEFAULT_CENTER: Coordinate = Coordinate { lat: 28.6139, lon: 77.209 };
pub const HOME_ZOOM: u8 = 15;
pub const PLANNER_ZOOM: u8 = 12;

/// Endpoints and map options for all views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub routing_api_url: String,
    pub traffic_api_url: String,
    pub geocoder_url: String,
    pub map_provider: TileProvider,
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None, None)
    }
}

impl ClientConfig {
    /// Read the `SMARTNAV_*` variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SMARTNAV_ROUTING_API_URL"),
            option_env!("SMARTNAV_TRAFFIC_API_URL"),
            option_env!("SMARTNAV_GEOCODER_URL"),
            option_env!("SMARTNAV_MAP_PROVIDER"),
            option_env!("SMARTNAV_POLL_INTERVAL_MS"),
        )
    }

    fn from_values(
        routing: Option<&str>,
        traffic: Option<&str>,
        geocoder: Option<&str>,
        provider: Option<&str>,
        poll_ms: Option<&str>,
    ) -> Self {
        Self {
            routing_api_url: base_url(routing, DEFAULT_ROUTING_API_URL),
            traffic_api_url: base_url(traffic, DEFAULT_TRAFFIC_API_URL),
            geocoder_url: base_url(geocoder, DEFAULT_GEOCODER_URL),
            map_provider: TileProvider::from_key(provider.unwrap_or(DEFAULT_MAP_PROVIDER)),
            poll_interval: Duration::from_millis(parse_poll_ms(poll_ms)),
        }
    }
}

/// Trimmed base URL without trailing slash; blank values use `default`.
fn base_url(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}

fn parse_poll_ms(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
}
