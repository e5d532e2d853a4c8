//! Sequence tagging for overlapping requests.
//!
//! Every request a view fires is tagged with the next number from its
//! [`RequestSeq`]. When the response arrives, [`RequestSeq::admit`] decides
//! whether it may be applied: anything issued before the most recently
//! applied response is stale and dropped, so an old response that resolves
//! late can never overwrite newer data.

#[cfg(test)]
#[path = "request_seq_test.rs"]
mod request_seq_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
    applied: u64,
}

impl RequestSeq {
    /// Tag for a new outgoing request. Tags start at 1.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// `seq` is the most recently issued request.
    #[must_use]
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }

    /// `seq` is newer than anything applied so far.
    #[must_use]
    pub fn is_fresh(&self, seq: u64) -> bool {
        seq > self.applied && seq <= self.issued
    }

    /// Mark `seq` as applied if it is fresh. Returns whether it was.
    pub fn admit(&mut self, seq: u64) -> bool {
        if !self.is_fresh(seq) {
            return false;
        }
        self.applied = seq;
        true
    }

    #[must_use]
    pub fn latest_issued(&self) -> u64 {
        self.issued
    }

    #[must_use]
    pub fn latest_applied(&self) -> u64 {
        self.applied
    }
}
