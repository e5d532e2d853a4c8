//! Failure taxonomy shared by every view that talks to a backend.
//!
//! Each failure belongs to exactly one [`ErrorClass`]; the class alone decides
//! how it is logged and shown (see `util::notify`).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// How a failure is surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Required input missing; rejected before any request.
    Validation,
    /// The backend answered with an explicit `error` payload.
    Application,
    /// Network failure, non-2xx status, or an undecodable body.
    Transport,
    /// Device location permission or availability failure.
    Geolocation,
}

/// Failure of a single HTTP call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("{0}")]
    Application(String),
}

impl FetchError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Application(_) => ErrorClass::Application,
            Self::Transport(_) | Self::Status(_) | Self::Decode(_) => ErrorClass::Transport,
        }
    }
}

/// Input rejected client-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter destination!")]
    MissingDestination,
}

impl ValidationError {
    #[must_use]
    pub fn class(self) -> ErrorClass {
        ErrorClass::Validation
    }
}
