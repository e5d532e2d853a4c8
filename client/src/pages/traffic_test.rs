use super::*;
use crate::net::error::FetchError;
use crate::net::types::TrafficSnapshot;

fn applied_at(ms: f64) -> TrafficState {
    let mut state = TrafficState::default();
    let seq = state.begin_poll();
    state.apply_result(seq, Ok(TrafficSnapshot::default()), ms);
    state
}

#[test]
fn freshness_before_first_response() {
    assert_eq!(freshness_label(&TrafficState::default(), 0.0, 1000.0), "Waiting for data...");
}

#[test]
fn freshness_when_backend_never_answered() {
    let mut state = TrafficState::default();
    let seq = state.begin_poll();
    state.apply_result(seq, Err(FetchError::Transport("offline".to_owned())), 0.0);
    assert_eq!(freshness_label(&state, 0.0, 1000.0), "Traffic backend unreachable");
}

#[test]
fn freshness_live_while_recent() {
    assert_eq!(freshness_label(&applied_at(5_000.0), 6_000.0, 1000.0), "Live");
}

#[test]
fn freshness_reports_age_when_stale() {
    assert_eq!(freshness_label(&applied_at(5_000.0), 12_400.0, 1000.0), "Stale: last update 7s ago");
}

#[test]
fn status_rows_describe_each_backend() {
    let backends = vec![
        BackendStatus { name: "routing".to_owned(), url: "r".to_owned(), online: true, latency_ms: Some(12) },
        BackendStatus { name: "traffic".to_owned(), url: "t".to_owned(), online: false, latency_ms: None },
    ];
    let rows = status_rows(&backends, None);
    assert_eq!(rows[0].label, "routing: online, 12 ms");
    assert_eq!(rows[0].dot_class, "status-dot status-dot--up");
    assert_eq!(rows[1].label, "traffic: offline");
    assert_eq!(rows[1].dot_class, "status-dot status-dot--down");
}

#[test]
fn status_rows_placeholder_while_loading_or_failed() {
    assert_eq!(status_rows(&[], None)[0].label, "Checking services...");
    assert_eq!(status_rows(&[], Some("status check failed: network error: x"))[0].label, "status check failed: network error: x");
}
