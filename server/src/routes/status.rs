//! Upstream reachability probe backing the dashboard's "System Status" panel.
//!
//! Every configured upstream is probed concurrently with a plain `GET` of its
//! base URL. Any HTTP answer below 500 counts as online: the routing and
//! traffic services do not expose a health route, and a 404 still proves the
//! process is up. Probe failures are reported in the body, never as an error
//! status, so the dashboard can always render the panel.

use std::time::{Duration, Instant};

use axum::extract::State;
use axum::response::Json;
use client::net::types::BackendStatus;
use futures::future::join_all;

use crate::config::Upstream;
use crate::state::AppState;

/// `GET /api/status`: reachability of each upstream service.
pub async fn backend_status(State(state): State<AppState>) -> Json<Vec<BackendStatus>> {
    Json(probe_all(&state.http, &state.config.upstreams, state.config.probe_timeout).await)
}

/// Probe all upstreams concurrently, preserving their configured order.
pub async fn probe_all(http: &reqwest::Client, upstreams: &[Upstream], timeout: Duration) -> Vec<BackendStatus> {
    join_all(upstreams.iter().map(|upstream| probe(http, upstream, timeout))).await
}

async fn probe(http: &reqwest::Client, upstream: &Upstream, timeout: Duration) -> BackendStatus {
    let started = Instant::now();
    let result = http.get(&upstream.url).timeout(timeout).send().await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let (online, latency_ms) = match result {
        Ok(resp) if resp.status().is_server_error() => {
            tracing::warn!(backend = upstream.name, status = %resp.status(), "upstream answered with server error");
            (false, Some(latency_ms))
        }
        Ok(_) => (true, Some(latency_ms)),
        Err(e) => {
            tracing::warn!(backend = upstream.name, error = %e, "upstream probe failed");
            (false, None)
        }
    };

    BackendStatus { name: upstream.name.to_owned(), url: upstream.url.clone(), online, latency_ms }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
