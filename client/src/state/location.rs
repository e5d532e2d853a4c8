//! Home page location panel: device position and its street address.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use mapkit::Coordinate;

use super::ApplyOutcome;
use crate::net::error::FetchError;
use crate::util::geolocation::GeolocationError;
use crate::util::notify::{self, Notice};
use crate::util::request_seq::RequestSeq;

pub const ADDRESS_PLACEHOLDER: &str = "Your location will appear here";

#[derive(Clone, Debug, Default)]
pub struct LocationState {
    pub position: Option<Coordinate>,
    pub address: Option<String>,
    pub locating: bool,
    /// Tags reverse-geocoding requests.
    pub seq: RequestSeq,
    pub notice: Option<Notice>,
}

impl LocationState {
    pub fn begin_locate(&mut self) {
        self.locating = true;
    }

    /// Record a position result. On success returns the tag for the
    /// reverse-geocoding request that should follow.
    pub fn apply_position(&mut self, result: Result<Coordinate, GeolocationError>) -> Option<u64> {
        self.locating = false;
        match result {
            Ok(at) => {
                self.position = Some(at);
                self.notice = None;
                Some(self.seq.issue())
            }
            Err(err) => {
                self.notice = Some(notify::report_geolocation(err));
                None
            }
        }
    }

    /// Record a reverse-geocoding result. Failures keep the prior address.
    pub fn apply_address(&mut self, seq: u64, result: Result<String, FetchError>) -> ApplyOutcome {
        if !self.seq.is_fresh(seq) {
            log::debug!("dropping stale geocode response #{seq}");
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(address) => {
                self.seq.admit(seq);
                self.address = Some(address);
                ApplyOutcome::Applied
            }
            Err(err) => {
                self.notice = Some(notify::report_fetch("reverse geocoding", &err));
                ApplyOutcome::Failed
            }
        }
    }

    #[must_use]
    pub fn address_label(&self) -> &str {
        self.address.as_deref().unwrap_or(ADDRESS_PLACEHOLDER)
    }
}
