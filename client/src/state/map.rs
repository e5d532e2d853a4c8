//! What a map view draws, and the command channel views use to move it.
//!
//! DESIGN
//! ======
//! Views never call into the map component. They describe markers and
//! overlays as data, and request camera moves by pushing a [`MapCommand`]
//! into a [`MapCommands`] signal. The map keeps the last sequence number it
//! handled and applies only newer commands.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use mapkit::{Bounds, Coordinate};

use crate::util::markers::MarkerKind;

#[derive(Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub at: Coordinate,
    pub popup: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteOverlay {
    pub path: Vec<Coordinate>,
    pub color: &'static str,
    pub selected: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapCommand {
    /// Center on a coordinate, optionally changing zoom.
    RecenterOn { center: Coordinate, zoom: Option<u8> },
    /// Show all of `bounds`.
    FitBounds(Bounds),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapCommands {
    pub seq: u64,
    pub latest: Option<MapCommand>,
}

impl MapCommands {
    pub fn send(&mut self, command: MapCommand) {
        self.seq += 1;
        self.latest = Some(command);
    }

    /// The latest command if it is newer than `last_seen`.
    #[must_use]
    pub fn since(&self, last_seen: u64) -> Option<(u64, MapCommand)> {
        if self.seq <= last_seen {
            return None;
        }
        self.latest.map(|command| (self.seq, command))
    }
}
