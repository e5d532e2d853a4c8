//! Wire DTOs for the routing, traffic, geocoding, and status endpoints.
//!
//! DESIGN
//! ======
//! Shapes mirror what the upstream services actually send. Backends written
//! in dynamic languages are loose about numbers (counts arrive as `12` or
//! `12.0`, labels as `"5 km"` or `5`), so the few fields where that matters
//! deserialize through tolerant helpers instead of failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use mapkit::Coordinate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /get_routes`. An empty `start` asks the backend to use the
/// device's current location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteRequest {
    pub start: String,
    pub destination: String,
}

/// Response of `POST /get_routes`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RoutesResponse {
    /// Application-level failure reported by the backend.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub routes: Option<Vec<RouteDto>>,
    #[serde(default)]
    pub start_coords: Option<Coordinate>,
    #[serde(default)]
    pub dest_coords: Option<Coordinate>,
}

/// One candidate route as sent by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RouteDto {
    #[serde(default, deserialize_with = "deserialize_label")]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub distance: String,
    #[serde(default, deserialize_with = "deserialize_opt_label")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_label")]
    pub duration_in_traffic: Option<String>,
    /// Explicit path geometry.
    #[serde(default)]
    pub coords: Option<Vec<Coordinate>>,
    /// Encoded path geometry; takes precedence over `coords` when present.
    #[serde(default)]
    pub polyline: Option<String>,
}

impl RouteDto {
    /// `duration`, falling back to `duration_in_traffic`.
    #[must_use]
    pub fn duration_label(&self) -> &str {
        self.duration
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.duration_in_traffic.as_deref())
            .unwrap_or_default()
    }
}

/// Signal colour reported by the traffic backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LightState {
    Red,
    Yellow,
    #[default]
    Green,
    /// Anything the backend sends that is not one of the three colours.
    #[serde(other)]
    Unknown,
}

impl LightState {
    pub const LAMPS: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Response of `GET /data` on the traffic backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    #[serde(deserialize_with = "deserialize_count")]
    pub north_south: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub east_west: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub total: u64,
    pub current_direction: String,
    pub light_state: LightState,
}

impl Default for TrafficSnapshot {
    fn default() -> Self {
        Self {
            north_south: 0,
            east_west: 0,
            total: 0,
            current_direction: "NORTH_SOUTH".to_owned(),
            light_state: LightState::Green,
        }
    }
}

/// Response of the reverse-geocoding provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Reachability of one upstream service, as reported by the host's `/api/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub name: String,
    pub url: String,
    pub online: bool,
    #[serde(default)]
    pub latency_ms: Option<u64>,
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_label(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected string or number label, got {other}"))),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
