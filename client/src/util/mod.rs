//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (geolocation, timers,
//! the icon registry) from page and component logic to improve reuse and
//! testability.

pub mod geolocation;
pub mod lifetime;
pub mod markers;
pub mod notify;
pub mod request_seq;
