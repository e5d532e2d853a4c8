use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(routes_endpoint("http://localhost:5000"), "http://localhost:5000/get_routes");
    assert_eq!(traffic_endpoint("https://traffic.test"), "https://traffic.test/data");
    assert_eq!(video_stream_url("https://traffic.test"), "https://traffic.test/video");
}

#[test]
fn reverse_geocode_endpoint_carries_lat_lon_and_format() {
    let url = reverse_geocode_endpoint("https://geo.test", Coordinate::new(28.6139, 77.209));
    assert_eq!(url, "https://geo.test/reverse?lat=28.6139&lon=77.209&format=json");
}

// --- routes ---

#[test]
fn routes_success_body_is_returned() {
    let body = r#"{"routes": [{"summary": "Fastest", "distance": "5 km", "duration": "12 min"}]}"#;
    let resp = classify_routes_body(200, body).unwrap();
    assert_eq!(resp.routes.map(|r| r.len()), Some(1));
}

#[test]
fn routes_error_field_is_application_error_even_on_success_status() {
    let err = classify_routes_body(200, r#"{"error": "No route found"}"#).unwrap_err();
    assert_eq!(err, FetchError::Application("No route found".to_owned()));
}

#[test]
fn routes_error_field_wins_over_bad_status() {
    let err = classify_routes_body(400, r#"{"error": "Destination is required"}"#).unwrap_err();
    assert_eq!(err, FetchError::Application("Destination is required".to_owned()));
}

#[test]
fn routes_blank_error_field_does_not_hide_routes() {
    let body = r#"{"error": "", "routes": [{"summary": "Fastest", "distance": "5 km", "duration": "12 min"}]}"#;
    let resp = classify_routes_body(200, body).unwrap();
    assert_eq!(resp.routes.map(|r| r.len()), Some(1));
}

#[test]
fn routes_blank_error_with_bad_status_is_status() {
    assert_eq!(classify_routes_body(502, r#"{"error": "  "}"#).unwrap_err(), FetchError::Status(502));
}

#[test]
fn routes_bad_status_without_error_field_is_status() {
    assert_eq!(classify_routes_body(500, "<html>boom</html>").unwrap_err(), FetchError::Status(500));
}

#[test]
fn routes_garbage_body_is_decode_error() {
    assert!(matches!(classify_routes_body(200, "not json"), Err(FetchError::Decode(_))));
}

// --- traffic ---

#[test]
fn traffic_body_decodes_snapshot() {
    let body = r#"{"north_south": 12, "east_west": 7, "total": 19, "current_direction": "EAST_WEST", "light_state": "YELLOW"}"#;
    let snap = classify_traffic_body(200, body).unwrap();
    assert_eq!(snap.total, 19);
}

#[test]
fn traffic_non_success_is_status_error() {
    assert_eq!(classify_traffic_body(503, "").unwrap_err(), FetchError::Status(503));
}

#[test]
fn traffic_missing_fields_is_decode_error() {
    assert!(matches!(classify_traffic_body(200, r#"{"total": 3}"#), Err(FetchError::Decode(_))));
}

// --- geocode / status ---

#[test]
fn geocode_returns_display_name() {
    let name = classify_geocode_body(200, r#"{"display_name": "Connaught Place, New Delhi"}"#).unwrap();
    assert_eq!(name, "Connaught Place, New Delhi");
}

#[test]
fn geocode_without_name_is_decode_error() {
    assert!(matches!(classify_geocode_body(200, r#"{"error": "Unable to geocode"}"#), Err(FetchError::Decode(_))));
    assert!(matches!(classify_geocode_body(200, r#"{"display_name": "  "}"#), Err(FetchError::Decode(_))));
}

#[test]
fn status_body_decodes_list() {
    let body = r#"[{"name": "routing", "url": "http://localhost:5000", "online": false, "latency_ms": null}]"#;
    let list = classify_status_body(200, body).unwrap();
    assert_eq!(list.len(), 1);
    assert!(!list[0].online);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_stubs_report_transport_errors() {
    let req = RouteRequest { start: String::new(), destination: "X".to_owned() };
    let err = block_on_ready(fetch_routes("http://x", &req));
    assert_eq!(err.unwrap_err().class(), crate::net::error::ErrorClass::Transport);
}

/// Drives a future that never suspends (the non-browser stubs).
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future suspended"),
    }
}
