//! Compass heading arithmetic, in degrees clockwise from north.

use geo::{Bearing, Haversine};

use crate::GeoPoint;
use crate::error::GeoError;

pub const FULL_TURN: f64 = 360.0;
pub const HALF_TURN: f64 = 180.0;
pub const QUARTER_TURN: f64 = 90.0;

/// Wraps any finite heading into `[0, 360)`.
#[inline]
pub fn normalize(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(FULL_TURN);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Normalizes the heading, rejecting non-finite values.
pub fn checked(heading: f64) -> Result<f64, GeoError> {
    if heading.is_finite() {
        Ok(normalize(heading))
    } else {
        Err(GeoError::InvalidHeading(heading))
    }
}

/// Rotates `heading` by `delta` degrees, clockwise for positive deltas.
#[inline]
pub fn rotate(heading: f64, delta: f64) -> f64 {
    normalize(heading + delta)
}

/// The shortest angular distance between two headings, in `[0, 180]`,
/// regardless of which way round the circle the difference wraps.
///
/// ```rust
/// use vendnav_geo::heading::angular_difference;
/// assert_eq!(angular_difference(350.0, 10.0), 20.0);
/// ```
#[inline]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    ((a - b + FULL_TURN + HALF_TURN).rem_euclid(FULL_TURN) - HALF_TURN).abs()
}

/// Initial great-circle bearing from `origin` towards `target`, in `[0, 360)`.
pub fn bearing(origin: GeoPoint, target: GeoPoint) -> f64 {
    normalize(Haversine.bearing(origin.into(), target.into()))
}
