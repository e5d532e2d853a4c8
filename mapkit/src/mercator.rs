//! Web-Mercator projection and viewport tile coverage.
//!
//! World pixels grow east (`x`) and south (`y`) from the antimeridian /
//! north edge; one world is `TILE_SIZE * 2^zoom` pixels square. A [`Viewport`]
//! is a screen-sized window onto that plane centered on a coordinate, and
//! answers the two questions a map view asks every frame: where does this
//! coordinate land on screen, and which tiles cover the screen.

#[cfg(test)]
#[path = "mercator_test.rs"]
mod mercator_test;

use std::f64::consts::PI;

use crate::coord::{Bounds, Coordinate};
use crate::tiles::TILE_SIZE;

pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 19;

/// Latitude where the square Mercator world is clipped.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A point in world or screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Edge length of the whole world in pixels at `zoom`.
#[must_use]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(MAX_ZOOM))
}

/// Coordinate to world pixels.
#[must_use]
pub fn project(coord: Coordinate, zoom: u8) -> Pixel {
    let size = world_size(zoom);
    let lat = coord.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (coord.lon + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    Pixel { x, y }
}

/// World pixels back to a coordinate.
#[must_use]
pub fn unproject(pixel: Pixel, zoom: u8) -> Coordinate {
    let size = world_size(zoom);
    let lon = pixel.x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * pixel.y / size;
    let lat = n.sinh().atan().to_degrees();
    Coordinate::new(lat, lon)
}

/// One tile to draw: its address and where its top-left corner sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSlot {
    pub z: u8,
    /// Column, wrapped into `0..2^z`.
    pub x: u32,
    pub y: u32,
    pub left: f64,
    pub top: f64,
}

/// A screen-sized window onto the projected world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(center: Coordinate, zoom: u8, width: f64, height: f64) -> Self {
        Self { center, zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM), width, height }
    }

    /// Smallest-scale viewport (largest zoom up to `max_zoom`) that shows all
    /// of `bounds` with `padding` pixels clear on every side.
    #[must_use]
    pub fn fit_bounds(bounds: Bounds, width: f64, height: f64, padding: f64, max_zoom: u8) -> Self {
        let usable_w = (width - 2.0 * padding).max(1.0);
        let usable_h = (height - 2.0 * padding).max(1.0);
        let nw = Coordinate::new(bounds.north, bounds.west);
        let se = Coordinate::new(bounds.south, bounds.east);

        let mut zoom = max_zoom.min(MAX_ZOOM);
        loop {
            let a = project(nw, zoom);
            let b = project(se, zoom);
            if ((b.x - a.x) <= usable_w && (b.y - a.y) <= usable_h) || zoom == MIN_ZOOM {
                let mid = Pixel::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
                return Self::new(unproject(mid, zoom), zoom, width, height);
            }
            zoom -= 1;
        }
    }

    /// World pixel under the screen's top-left corner.
    #[must_use]
    pub fn origin(&self) -> Pixel {
        let c = project(self.center, self.zoom);
        Pixel::new(c.x - self.width / 2.0, c.y - self.height / 2.0)
    }

    #[must_use]
    pub fn to_screen(&self, coord: Coordinate) -> Pixel {
        let origin = self.origin();
        let p = project(coord, self.zoom);
        Pixel::new(p.x - origin.x, p.y - origin.y)
    }

    #[must_use]
    pub fn to_coordinate(&self, screen: Pixel) -> Coordinate {
        let origin = self.origin();
        unproject(Pixel::new(screen.x + origin.x, screen.y + origin.y), self.zoom)
    }

    #[must_use]
    pub fn with_center(self, center: Coordinate) -> Self {
        Self { center, ..self }
    }

    #[must_use]
    pub fn with_zoom(self, zoom: u8) -> Self {
        Self { zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM), ..self }
    }

    /// Move the view by a screen-space drag delta.
    #[must_use]
    pub fn panned_by(self, dx: f64, dy: f64) -> Self {
        let center = self.to_coordinate(Pixel::new(self.width / 2.0 - dx, self.height / 2.0 - dy));
        self.with_center(center)
    }

    /// Tiles covering the screen, row-major from the top-left.
    ///
    /// Columns wrap around the antimeridian; rows outside the world are
    /// skipped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn visible_tiles(&self) -> Vec<TileSlot> {
        let origin = self.origin();
        let n = 1i64 << self.zoom;
        let first_x = (origin.x / TILE_SIZE).floor() as i64;
        let last_x = ((origin.x + self.width) / TILE_SIZE).ceil() as i64 - 1;
        let first_y = ((origin.y / TILE_SIZE).floor() as i64).max(0);
        let last_y = (((origin.y + self.height) / TILE_SIZE).ceil() as i64 - 1).min(n - 1);

        let mut tiles = Vec::new();
        for ty in first_y..=last_y {
            for tx in first_x..=last_x {
                let wrapped = tx.rem_euclid(n);
                tiles.push(TileSlot {
                    z: self.zoom,
                    x: wrapped as u32,
                    y: ty as u32,
                    left: tx as f64 * TILE_SIZE - origin.x,
                    top: ty as f64 * TILE_SIZE - origin.y,
                });
            }
        }
        tiles
    }
}
