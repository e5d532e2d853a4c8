//! HTTP calls to the routing, traffic, geocoding, and host status endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error, since these
//! endpoints are only ever called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, FetchError>`. Response classification is
//! split into pure `classify_*` helpers that take `(status, body)` so the
//! rules are testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use mapkit::Coordinate;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::error::FetchError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ReverseGeocodeResponse;
use super::types::{BackendStatus, RouteRequest, RoutesResponse, TrafficSnapshot};

/// Host endpoint listing upstream reachability.
pub const STATUS_ENDPOINT: &str = "/api/status";

#[cfg(any(test, feature = "hydrate"))]
fn routes_endpoint(base: &str) -> String {
    format!("{base}/get_routes")
}

#[cfg(any(test, feature = "hydrate"))]
fn traffic_endpoint(base: &str) -> String {
    format!("{base}/data")
}

/// Live camera feed; consumed directly as an `<img>` source.
#[must_use]
pub fn video_stream_url(base: &str) -> String {
    format!("{base}/video")
}

#[cfg(any(test, feature = "hydrate"))]
fn reverse_geocode_endpoint(base: &str, at: Coordinate) -> String {
    format!("{base}/reverse?lat={}&lon={}&format=json", at.lat, at.lon)
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_json<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !is_success(status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Classify a `/get_routes` response.
///
/// The routing backend reports application failures as `{"error": ...}`,
/// sometimes with a 4xx status, so the body is inspected before the status.
/// A blank `error` is not a failure.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_routes_body(status: u16, body: &str) -> Result<RoutesResponse, FetchError> {
    let parsed = serde_json::from_str::<RoutesResponse>(body);
    if let Ok(RoutesResponse { error: Some(message), .. }) = &parsed {
        if !message.trim().is_empty() {
            return Err(FetchError::Application(message.clone()));
        }
    }
    if !is_success(status) {
        return Err(FetchError::Status(status));
    }
    parsed.map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_traffic_body(status: u16, body: &str) -> Result<TrafficSnapshot, FetchError> {
    decode_json(status, body)
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_geocode_body(status: u16, body: &str) -> Result<String, FetchError> {
    let resp: ReverseGeocodeResponse = decode_json(status, body)?;
    resp.display_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| FetchError::Decode("response has no display_name".to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_status_body(status: u16, body: &str) -> Result<Vec<BackendStatus>, FetchError> {
    decode_json(status, body)
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<(u16, String), FetchError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
async fn get_text(url: &str) -> Result<(u16, String), FetchError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    read_body(resp).await
}

/// Request candidate routes via `POST {base}/get_routes`.
///
/// # Errors
///
/// `Application` when the backend reports an `error`; `Transport`, `Status`,
/// or `Decode` otherwise.
pub async fn fetch_routes(base: &str, request: &RouteRequest) -> Result<RoutesResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&routes_endpoint(base))
            .json(request)
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let (status, body) = read_body(resp).await?;
        classify_routes_body(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, request);
        Err(FetchError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the latest traffic snapshot via `GET {base}/data`.
///
/// # Errors
///
/// `Transport`, `Status`, or `Decode` on any failure.
pub async fn fetch_traffic_snapshot(base: &str) -> Result<TrafficSnapshot, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = get_text(&traffic_endpoint(base)).await?;
        classify_traffic_body(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(FetchError::Transport("not available on server".to_owned()))
    }
}

/// Resolve a coordinate to a human-readable address.
///
/// # Errors
///
/// `Transport`, `Status`, or `Decode` (including a response without an
/// address).
pub async fn reverse_geocode(base: &str, at: Coordinate) -> Result<String, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = get_text(&reverse_geocode_endpoint(base, at)).await?;
        classify_geocode_body(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, at);
        Err(FetchError::Transport("not available on server".to_owned()))
    }
}

/// Fetch upstream reachability from the host.
///
/// # Errors
///
/// `Transport`, `Status`, or `Decode` on any failure.
pub async fn fetch_backend_status() -> Result<Vec<BackendStatus>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = get_text(STATUS_ENDPOINT).await?;
        classify_status_body(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Transport("not available on server".to_owned()))
    }
}
