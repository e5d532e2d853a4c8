//! Per-view lifetime flag and the fixed-interval refresh loop built on it.
//!
//! A view creates one [`ViewLifetime`] on mount and ends it from
//! `on_cleanup`. Anything asynchronous the view started (poll ticks, fetches,
//! geolocation callbacks) checks the flag before touching view state, so
//! work that resolves after unmount is a no-op.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Tick counter that stops once its lifetime ends.
#[derive(Debug)]
pub struct RefreshLoop {
    lifetime: ViewLifetime,
    ticks: u64,
}

impl RefreshLoop {
    #[must_use]
    pub fn new(lifetime: ViewLifetime) -> Self {
        Self { lifetime, ticks: 0 }
    }

    /// Number of the next tick, or `None` once the view is gone.
    pub fn next_tick(&mut self) -> Option<u64> {
        if !self.lifetime.is_alive() {
            return None;
        }
        self.ticks += 1;
        Some(self.ticks)
    }
}

/// Run `on_tick` immediately, then every `interval`, until `lifetime` ends.
///
/// `on_tick` must not block on its own request: each tick fires its fetch
/// and returns, so a slow response never delays the next tick.
#[cfg(feature = "hydrate")]
pub fn spawn_refresh_loop(lifetime: ViewLifetime, interval: std::time::Duration, mut on_tick: impl FnMut(u64) + 'static) {
    leptos::task::spawn_local(async move {
        let mut refresh = RefreshLoop::new(lifetime);
        while let Some(tick) = refresh.next_tick() {
            on_tick(tick);
            gloo_timers::future::sleep(interval).await;
        }
        log::debug!("refresh loop stopped after {} ticks", refresh.ticks);
    });
}
