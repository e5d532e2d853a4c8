use super::*;

#[test]
fn validation_is_inline_with_raw_prompt() {
    let notice = report_validation(ValidationError::MissingDestination);
    assert_eq!(notice.presentation(), Presentation::Inline);
    assert_eq!(notice.message, "Please enter destination!");
    assert_eq!(notice.css_class(), "notice notice--inline");
}

#[test]
fn application_error_is_error_banner_with_backend_message() {
    let notice = report_fetch("route fetch", &FetchError::Application("No route found".to_owned()));
    assert_eq!(notice.presentation(), Presentation::Banner);
    assert_eq!(notice.severity(), Severity::Error);
    assert_eq!(notice.message, "No route found");
    assert!(!notice.clears_on_success());
}

#[test]
fn transport_error_is_warning_banner_cleared_on_success() {
    let notice = report_fetch("traffic poll", &FetchError::Status(502));
    assert_eq!(notice.severity(), Severity::Warning);
    assert_eq!(notice.css_class(), "notice notice--warning");
    assert_eq!(notice.message, "traffic poll failed: server responded with status 502");
    assert!(notice.clears_on_success());
}

#[test]
fn geolocation_error_is_warning_banner() {
    let notice = report_geolocation(GeolocationError::PermissionDenied);
    assert_eq!(notice.class, ErrorClass::Geolocation);
    assert_eq!(notice.presentation(), Presentation::Banner);
    assert_eq!(notice.message, "Could not get your location: location permission denied");
}
