//! Traffic dashboard state.
//!
//! DESIGN
//! ======
//! The displayed snapshot only ever changes by wholesale replacement with a
//! fresh poll response. Failed ticks leave it in place and raise a transport
//! notice, which the next applied snapshot clears. Responses issued before an
//! already-applied one are dropped.

#[cfg(test)]
#[path = "traffic_test.rs"]
mod traffic_test;

use super::ApplyOutcome;
use crate::net::error::FetchError;
use crate::net::types::{BackendStatus, TrafficSnapshot};
use crate::util::notify::{self, Notice};
use crate::util::request_seq::RequestSeq;

/// Snapshot age, in poll intervals, after which the display is marked stale.
pub const STALE_AFTER_INTERVALS: f64 = 3.0;

#[derive(Clone, Debug, Default)]
pub struct TrafficState {
    pub snapshot: TrafficSnapshot,
    pub seq: RequestSeq,
    /// Wall-clock ms of the last applied snapshot.
    pub last_updated_ms: Option<f64>,
    pub consecutive_failures: u32,
    pub notice: Option<Notice>,
    /// Upstream reachability for the "System Status" panel.
    pub backends: Vec<BackendStatus>,
    pub backends_error: Option<String>,
}

impl TrafficState {
    /// Tag for the next poll request.
    pub fn begin_poll(&mut self) -> u64 {
        self.seq.issue()
    }

    pub fn apply_result(&mut self, seq: u64, result: Result<TrafficSnapshot, FetchError>, now_ms: f64) -> ApplyOutcome {
        if !self.seq.is_fresh(seq) {
            log::debug!("dropping stale traffic response #{seq} (applied #{})", self.seq.latest_applied());
            return ApplyOutcome::Stale;
        }
        match result {
            Ok(snapshot) => {
                self.seq.admit(seq);
                self.snapshot = snapshot;
                self.last_updated_ms = Some(now_ms);
                self.consecutive_failures = 0;
                if self.notice.as_ref().is_some_and(Notice::clears_on_success) {
                    self.notice = None;
                }
                ApplyOutcome::Applied
            }
            Err(err) => {
                self.consecutive_failures += 1;
                self.notice = Some(notify::report_fetch("traffic poll", &err));
                ApplyOutcome::Failed
            }
        }
    }

    pub fn apply_backends(&mut self, result: Result<Vec<BackendStatus>, FetchError>) {
        match result {
            Ok(list) => {
                self.backends = list;
                self.backends_error = None;
            }
            Err(err) => {
                self.backends_error = Some(notify::report_fetch("status check", &err).message);
            }
        }
    }

    /// The snapshot on screen is older than it should be.
    #[must_use]
    pub fn is_stale(&self, now_ms: f64, poll_interval_ms: f64) -> bool {
        match self.last_updated_ms {
            Some(at) => now_ms - at > poll_interval_ms * STALE_AFTER_INTERVALS,
            None => self.consecutive_failures > 0,
        }
    }
}
