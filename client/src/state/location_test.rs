use super::*;
use crate::net::error::ErrorClass;

fn delhi() -> Coordinate {
    Coordinate::new(28.6139, 77.209)
}

#[test]
fn placeholder_until_address_known() {
    assert_eq!(LocationState::default().address_label(), "Your location will appear here");
}

#[test]
fn position_success_updates_coordinate_and_requests_geocode() {
    let mut state = LocationState::default();
    state.begin_locate();
    assert!(state.locating);
    let seq = state.apply_position(Ok(delhi()));
    assert_eq!(seq, Some(1));
    assert_eq!(state.position, Some(delhi()));
    assert!(!state.locating);
}

#[test]
fn position_failure_changes_nothing_but_notice() {
    let mut state = LocationState { position: Some(delhi()), address: Some("Old".to_owned()), ..LocationState::default() };
    state.begin_locate();
    assert_eq!(state.apply_position(Err(GeolocationError::PermissionDenied)), None);
    assert_eq!(state.position, Some(delhi()));
    assert_eq!(state.address_label(), "Old");
    assert_eq!(state.notice.as_ref().map(|n| n.class), Some(ErrorClass::Geolocation));
}

#[test]
fn geocode_success_shows_address() {
    let mut state = LocationState::default();
    let seq = state.apply_position(Ok(delhi())).unwrap();
    assert_eq!(state.apply_address(seq, Ok("Rajpath, New Delhi".to_owned())), ApplyOutcome::Applied);
    assert_eq!(state.address_label(), "Rajpath, New Delhi");
}

#[test]
fn geocode_failure_keeps_prior_address() {
    let mut state = LocationState::default();
    let first = state.apply_position(Ok(delhi())).unwrap();
    state.apply_address(first, Ok("First".to_owned()));
    let second = state.apply_position(Ok(delhi())).unwrap();
    assert_eq!(state.apply_address(second, Err(FetchError::Status(429))), ApplyOutcome::Failed);
    assert_eq!(state.address_label(), "First");
}

#[test]
fn late_geocode_for_older_position_is_dropped() {
    let mut state = LocationState::default();
    let older = state.apply_position(Ok(delhi())).unwrap();
    let newer = state.apply_position(Ok(Coordinate::new(19.07, 72.87))).unwrap();
    state.apply_address(newer, Ok("Mumbai".to_owned()));
    assert_eq!(state.apply_address(older, Ok("Delhi".to_owned())), ApplyOutcome::Stale);
    assert_eq!(state.address_label(), "Mumbai");
}
