use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_environment_is_empty() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.probe_timeout, Duration::from_millis(DEFAULT_STATUS_PROBE_TIMEOUT_MS));
    let names: Vec<_> = cfg.upstreams.iter().map(|u| u.name).collect();
    assert_eq!(names, ["routing", "traffic", "geocoder"]);
    assert_eq!(cfg.upstreams[0].url, DEFAULT_ROUTING_API_URL);
    assert_eq!(cfg.upstreams[1].url, DEFAULT_TRAFFIC_API_URL);
    assert_eq!(cfg.upstreams[2].url, DEFAULT_GEOCODER_URL);
}

#[test]
fn overrides_are_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("STATUS_PROBE_TIMEOUT_MS", "250"),
        ("SMARTNAV_TRAFFIC_API_URL", " https://traffic.example.test/ "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.probe_timeout, Duration::from_millis(250));
    assert_eq!(cfg.upstreams[1].url, "https://traffic.example.test");
}

#[test]
fn blank_upstream_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("SMARTNAV_GEOCODER_URL", "  ")])).unwrap();
    assert_eq!(cfg.upstreams[2].url, DEFAULT_GEOCODER_URL);
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn zero_probe_timeout_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("STATUS_PROBE_TIMEOUT_MS", "0")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidProbeTimeout("0".to_owned()));
}
