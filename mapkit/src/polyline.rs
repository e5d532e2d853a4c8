//! Encoded polyline codec.
//!
//! Routing providers ship route geometry as an "encoded polyline": each
//! coordinate is stored as a signed delta from the previous one, scaled by
//! `10^precision`, zig-zag folded, and split into 5-bit chunks offset into the
//! printable ASCII range (`?` .. `~`). Google and most OSRM deployments use
//! precision 5; Valhalla-style providers use 6.
//!
//! Decoding is strict. Anything outside the printable range, a value cut off
//! mid-chunk, or a latitude without its longitude is reported as a
//! [`PolylineError`] rather than producing a partial path.

#[cfg(test)]
#[path = "polyline_test.rs"]
mod polyline_test;

use crate::coord::Coordinate;

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION: u64 = 0x20;
const ASCII_OFFSET: u8 = 63;
const MAX_SHIFT: u32 = 60;

/// Error returned by [`PolylineCodec::decode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolylineError {
    /// Input ended in the middle of a value, or after a latitude with no longitude.
    #[error("encoded path truncated at byte {offset}")]
    Truncated { offset: usize },
    /// A byte outside `?`..=`~` was found.
    #[error("invalid byte 0x{byte:02x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },
    /// A value ran past the 64-bit accumulator or the running sum overflowed.
    #[error("value starting at byte {offset} overflows")]
    Overflow { offset: usize },
}

/// Encoder/decoder for a fixed coordinate precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolylineCodec {
    precision: u32,
}

impl Default for PolylineCodec {
    fn default() -> Self {
        Self::GOOGLE
    }
}

impl PolylineCodec {
    /// Five decimal places, the Google / OSRM default.
    pub const GOOGLE: Self = Self { precision: 5 };
    /// Six decimal places (Valhalla, OSRM `polyline6`).
    pub const PRECISION_6: Self = Self { precision: 6 };

    #[must_use]
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    fn factor(self) -> f64 {
        let exp = i32::try_from(self.precision).unwrap_or(i32::MAX);
        10f64.powi(exp)
    }

    /// Decode an encoded path into an ordered coordinate sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError`] when the input is malformed. An empty string
    /// decodes to an empty path.
    #[allow(clippy::cast_precision_loss)]
    pub fn decode(&self, encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
        let bytes = encoded.as_bytes();
        let factor = self.factor();
        let mut coords = Vec::new();
        let mut pos = 0;
        let mut lat: i64 = 0;
        let mut lon: i64 = 0;

        while pos < bytes.len() {
            let lat_start = pos;
            let (d_lat, next) = read_value(bytes, pos)?;
            if next >= bytes.len() {
                return Err(PolylineError::Truncated { offset: next });
            }
            let lon_start = next;
            let (d_lon, next) = read_value(bytes, next)?;
            pos = next;

            lat = lat.checked_add(d_lat).ok_or(PolylineError::Overflow { offset: lat_start })?;
            lon = lon.checked_add(d_lon).ok_or(PolylineError::Overflow { offset: lon_start })?;
            coords.push(Coordinate::new(lat as f64 / factor, lon as f64 / factor));
        }

        Ok(coords)
    }

    /// Encode a coordinate sequence. Values are rounded to the codec precision.
    ///
    /// Never panics. Non-finite or out-of-range coordinates encode to some
    /// string, but it will not decode back to them.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode(&self, coords: &[Coordinate]) -> String {
        let factor = self.factor();
        let mut out = String::with_capacity(coords.len() * 8);
        let mut prev_lat: i64 = 0;
        let mut prev_lon: i64 = 0;

        for coord in coords {
            let lat = (coord.lat * factor).round() as i64;
            let lon = (coord.lon * factor).round() as i64;
            write_value(lat.wrapping_sub(prev_lat), &mut out);
            write_value(lon.wrapping_sub(prev_lon), &mut out);
            prev_lat = lat;
            prev_lon = lon;
        }

        out
    }
}

/// Decode with the default (precision 5) codec.
///
/// # Errors
///
/// See [`PolylineCodec::decode`].
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    PolylineCodec::GOOGLE.decode(encoded)
}

/// Encode with the default (precision 5) codec.
#[must_use]
pub fn encode(coords: &[Coordinate]) -> String {
    PolylineCodec::GOOGLE.encode(coords)
}

/// Read one zig-zag value starting at `start`; returns the value and the next offset.
#[allow(clippy::cast_possible_wrap)]
fn read_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;
    let mut pos = start;

    loop {
        let Some(&byte) = bytes.get(pos) else {
            return Err(PolylineError::Truncated { offset: pos });
        };
        if !(ASCII_OFFSET..=b'~').contains(&byte) {
            return Err(PolylineError::InvalidByte { offset: pos, byte });
        }
        let chunk = u64::from(byte - ASCII_OFFSET);
        let bits = chunk & CHUNK_MASK;
        // Only the low four bits of the last chunk fit in the accumulator.
        if shift == MAX_SHIFT && bits >> (u64::BITS - MAX_SHIFT) != 0 {
            return Err(PolylineError::Overflow { offset: start });
        }
        result |= bits << shift;
        pos += 1;
        if chunk < CONTINUATION {
            break;
        }
        shift += CHUNK_BITS;
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { offset: start });
        }
    }

    let magnitude = (result >> 1) as i64;
    let value = if result & 1 == 1 { !magnitude } else { magnitude };
    Ok((value, pos))
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn write_value(value: i64, out: &mut String) {
    let zigzag = if value < 0 { !(value << 1) } else { value << 1 };
    let mut folded = zigzag as u64;
    while folded >= CONTINUATION {
        let chunk = (CONTINUATION | (folded & CHUNK_MASK)) as u8 + ASCII_OFFSET;
        out.push(char::from(chunk));
        folded >>= CHUNK_BITS;
    }
    out.push(char::from(folded as u8 + ASCII_OFFSET));
}
