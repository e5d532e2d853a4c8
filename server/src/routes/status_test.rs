use super::*;
use crate::config::ServerConfig;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn upstream(name: &'static str, url: String) -> Upstream {
    Upstream { name, url }
}

#[tokio::test]
async fn ok_and_not_found_both_count_as_online() {
    let ok = spawn_upstream(Router::new().route("/", get(|| async { "ok" }))).await;
    let missing = spawn_upstream(Router::new()).await;

    let statuses = probe_all(
        &reqwest::Client::new(),
        &[upstream("routing", ok.clone()), upstream("traffic", missing)],
        Duration::from_secs(2),
    )
    .await;

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].name, "routing");
    assert_eq!(statuses[0].url, ok);
    assert!(statuses[0].online);
    assert!(statuses[0].latency_ms.is_some());
    assert!(statuses[1].online);
}

#[tokio::test]
async fn server_error_counts_as_offline_with_latency() {
    let failing =
        spawn_upstream(Router::new().route("/", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))).await;

    let statuses = probe_all(&reqwest::Client::new(), &[upstream("traffic", failing)], Duration::from_secs(2)).await;

    assert!(!statuses[0].online);
    assert!(statuses[0].latency_ms.is_some());
}

#[tokio::test]
async fn unreachable_upstream_is_offline_without_latency() {
    let url = closed_port_url().await;

    let statuses = probe_all(&reqwest::Client::new(), &[upstream("geocoder", url)], Duration::from_secs(2)).await;

    assert!(!statuses[0].online);
    assert_eq!(statuses[0].latency_ms, None);
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let slow = spawn_upstream(Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "late"
        }),
    ))
    .await;

    let statuses = probe_all(&reqwest::Client::new(), &[upstream("routing", slow)], Duration::from_millis(100)).await;

    assert!(!statuses[0].online);
}

#[tokio::test]
async fn status_endpoint_serves_probe_results_as_json() {
    let ok = spawn_upstream(Router::new().route("/", get(|| async { "ok" }))).await;
    let config = ServerConfig {
        port: 0,
        upstreams: vec![upstream("routing", ok)],
        probe_timeout: Duration::from_secs(2),
    };
    let state = AppState::new(config).expect("http client");
    let host = spawn_upstream(crate::routes::api_routes(state)).await;

    let body: Vec<BackendStatus> = reqwest::get(format!("{host}/api/status"))
        .await
        .expect("status request")
        .json()
        .await
        .expect("status body");
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].name, "routing");
    assert!(body[0].online);

    let health = reqwest::get(format!("{host}/healthz")).await.expect("healthz request");
    assert_eq!(health.status(), reqwest::StatusCode::OK);
}
