//! Map geometry for the `client` views.
//!
//! This crate owns the coordinate model, the encoded-polyline codec used by
//! routing providers, the slippy-map tile provider catalogue, and the
//! Web-Mercator math that turns coordinates into screen pixels. It performs no
//! I/O so every piece is testable natively.

pub mod coord;
pub mod mercator;
pub mod polyline;
pub mod tiles;

pub use coord::{Bounds, Coordinate};
pub use polyline::{PolylineCodec, PolylineError};
pub use tiles::TileProvider;
