#[cfg(test)]
#[path = "coord_test.rs"]
mod coord_test;

use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Serialized as a two-element `[lat, lon]` array, which is the shape every
/// backend this app talks to uses on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(pair: [f64; 2]) -> Self {
        Self { lat: pair[0], lon: pair[1] }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lat, coord.lon]
    }
}

/// Axis-aligned lat/lon box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Degenerate box containing a single point.
    #[must_use]
    pub fn around(coord: Coordinate) -> Self {
        Self { south: coord.lat, west: coord.lon, north: coord.lat, east: coord.lon }
    }

    /// Smallest box containing every coordinate, or `None` for an empty input.
    pub fn from_coords<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::around(first), |mut acc, c| {
            acc.extend(c);
            acc
        }))
    }

    pub fn extend(&mut self, coord: Coordinate) {
        self.south = self.south.min(coord.lat);
        self.north = self.north.max(coord.lat);
        self.west = self.west.min(coord.lon);
        self.east = self.east.max(coord.lon);
    }
}
