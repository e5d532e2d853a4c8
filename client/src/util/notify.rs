//! One notification policy per error class.
//!
//! | class       | log     | shown as                     |
//! |-------------|---------|------------------------------|
//! | Validation  | -       | inline prompt                |
//! | Application | `warn`  | error banner                 |
//! | Transport   | `error` | warning banner               |
//! | Geolocation | `warn`  | warning banner               |
//!
//! Views never log or format failures themselves; they call [`report`] and
//! store the returned [`Notice`].

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::net::error::{ErrorClass, FetchError, ValidationError};
use crate::util::geolocation::GeolocationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Inline,
    Banner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A user-visible message produced by a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub class: ErrorClass,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        match self.class {
            ErrorClass::Validation => Presentation::Inline,
            ErrorClass::Application | ErrorClass::Transport | ErrorClass::Geolocation => Presentation::Banner,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self.class {
            ErrorClass::Validation | ErrorClass::Application => Severity::Error,
            ErrorClass::Transport | ErrorClass::Geolocation => Severity::Warning,
        }
    }

    /// Transport notices describe a condition the next success disproves.
    #[must_use]
    pub fn clears_on_success(&self) -> bool {
        self.class == ErrorClass::Transport
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match (self.presentation(), self.severity()) {
            (Presentation::Inline, _) => "notice notice--inline",
            (Presentation::Banner, Severity::Error) => "notice notice--error",
            (Presentation::Banner, Severity::Warning) => "notice notice--warning",
        }
    }
}

/// Log `message` per its class and build the notice to show.
///
/// `context` names the operation that failed ("traffic poll", "route fetch").
pub fn report(class: ErrorClass, context: &str, message: &str) -> Notice {
    match class {
        ErrorClass::Validation => {}
        ErrorClass::Application | ErrorClass::Geolocation => log::warn!("{context}: {message}"),
        ErrorClass::Transport => log::error!("{context}: {message}"),
    }
    Notice { class, message: user_message(class, context, message) }
}

fn user_message(class: ErrorClass, context: &str, message: &str) -> String {
    match class {
        ErrorClass::Validation | ErrorClass::Application => message.to_owned(),
        ErrorClass::Transport => format!("{context} failed: {message}"),
        ErrorClass::Geolocation => format!("Could not get your location: {message}"),
    }
}

pub fn report_fetch(context: &str, err: &FetchError) -> Notice {
    report(err.class(), context, &err.to_string())
}

pub fn report_validation(err: ValidationError) -> Notice {
    report(err.class(), "input", &err.to_string())
}

pub fn report_geolocation(err: GeolocationError) -> Notice {
    report(ErrorClass::Geolocation, "geolocation", &err.to_string())
}
