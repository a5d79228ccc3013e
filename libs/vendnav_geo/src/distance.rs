//! Local flat-earth distance estimation.
//!
//! The estimator projects both positions onto a plane tangent at the origin's
//! latitude (an equirectangular projection) and measures the straight line
//! between them. It is only accurate over short spans, such as machines
//! within the same campus or city, and accumulates error beyond that.
//! It is not a geodesic computation; use [`geo::Haversine`] for that.

use geo::Distance;

use crate::GeoPoint;

/// Kilometres spanned by one degree of latitude.
pub const KM_PER_DEGREE_LATITUDE: f64 = 111.32;

/// Kilometres spanned by one degree of longitude at the equator.
pub const KM_PER_DEGREE_LONGITUDE: f64 = 110.57;

/// Equirectangular metric space, measured in kilometres.
///
/// ```rust
/// use geo::Distance;
/// use vendnav_geo::{Equirectangular, GeoPoint};
///
/// let origin = GeoPoint::new(33.6461, -117.8427);
/// let machine = GeoPoint::new(33.6470, -117.8410);
///
/// let km = Equirectangular.distance(origin, machine);
/// assert!(km > 0.0 && km < 1.0);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Equirectangular;

impl Distance<f64, GeoPoint, GeoPoint> for Equirectangular {
    /// The longitudinal scale is taken at the `origin` latitude, so the
    /// measure is not strictly symmetric.
    fn distance(&self, origin: GeoPoint, destination: GeoPoint) -> f64 {
        let dy = (destination.latitude - origin.latitude) * KM_PER_DEGREE_LATITUDE;
        let dx = (destination.longitude - origin.longitude)
            * KM_PER_DEGREE_LONGITUDE
            * origin.latitude.to_radians().cos();

        // NaN components must survive into the result.
        (dx * dx + dy * dy).sqrt()
    }
}

/// Estimates the distance from `a` to `b` in kilometres.
/// See [`Equirectangular`].
#[inline]
pub fn estimate_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    Equirectangular.distance(a, b)
}
