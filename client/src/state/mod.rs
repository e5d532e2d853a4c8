//! Client-side view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one state struct wrapped in an `RwSignal`; nothing here is
//! shared between pages. Structs are plain data with pure transition methods
//! so every rule can be tested without a browser.

pub mod location;
pub mod map;
pub mod routes;
pub mod traffic;

/// What happened to an async response handed to a state struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Failed,
    /// Superseded by a newer applied response; dropped.
    Stale,
}
