//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view state and the async flows that feed it, and
//! delegates rendering details to `components`.

pub mod home;
pub mod navigation;
pub mod traffic;
