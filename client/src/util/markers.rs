//! Marker icon registry.
//!
//! Icons are installed once at app startup by [`install_default_icons`] and
//! read by the map view on every render. A render that runs before install
//! (it should not) still draws, using the built-in set.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Device position on the home map.
    You,
    Start,
    Destination,
}

/// How one marker kind is drawn: a pin of `size` px, tip at the coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub size: f64,
    pub glyph: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerIcons {
    pub you: MarkerStyle,
    pub start: MarkerStyle,
    pub destination: MarkerStyle,
}

impl MarkerIcons {
    pub const DEFAULT: Self = Self {
        you: MarkerStyle { fill: "#3b82f6", stroke: "#1e3a8a", size: 28.0, glyph: "●" },
        start: MarkerStyle { fill: "#22c55e", stroke: "#14532d", size: 32.0, glyph: "A" },
        destination: MarkerStyle { fill: "#ef4444", stroke: "#7f1d1d", size: 32.0, glyph: "B" },
    };

    #[must_use]
    pub fn style(&self, kind: MarkerKind) -> MarkerStyle {
        match kind {
            MarkerKind::You => self.you,
            MarkerKind::Start => self.start,
            MarkerKind::Destination => self.destination,
        }
    }
}

static ICONS: OnceLock<MarkerIcons> = OnceLock::new();

/// Install the default icon set. Returns `false` if icons were already installed.
pub fn install_default_icons() -> bool {
    install_icons(MarkerIcons::DEFAULT)
}

pub(crate) fn install_icons(icons: MarkerIcons) -> bool {
    let installed = ICONS.set(icons).is_ok();
    if installed {
        log::debug!("marker icons installed");
    }
    installed
}

#[must_use]
pub fn icons() -> &'static MarkerIcons {
    ICONS.get().unwrap_or_else(|| {
        log::warn!("marker icons read before install; using defaults");
        &MarkerIcons::DEFAULT
    })
}
