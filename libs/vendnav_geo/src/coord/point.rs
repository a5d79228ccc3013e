use std::fmt::{Debug, Formatter};

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

pub type Degree = f64;

/// Absolute tolerance, in degrees, under which two coordinates are the same.
pub const COORDINATE_EPSILON: Degree = 1e-9;

/// `GeoPoint`
/// The latitude, longitude pair structure, geotags an item with a location.
///
/// ```rust
/// use vendnav_geo::GeoPoint;
/// let point = GeoPoint::new(33.6461, -117.8427);
/// println!("Position: {:?}", point);
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: Degree,
    pub longitude: Degree,
}

impl GeoPoint {
    /// Constructs a new `GeoPoint` from a given `latitude` and `longitude`,
    /// without validating either component.
    pub const fn new(latitude: Degree, longitude: Degree) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    pub fn try_new(latitude: Degree, longitude: Degree) -> Result<Self, GeoError> {
        if !(-90f64..=90f64).contains(&latitude) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be within -90 and 90. Given: {}",
                latitude
            )));
        }

        if !(-180f64..=180f64).contains(&longitude) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be within -180 and 180. Given: {}",
                longitude
            )));
        }

        Ok(Self::new(latitude, longitude))
    }

    /// Builds a point from a `[lng, lat]` pair, the order used by GeoJSON
    /// and the routing service.
    pub fn from_lng_lat([longitude, latitude]: [Degree; 2]) -> Self {
        Self::new(latitude, longitude)
    }

    /// Returns a `[lng, lat]` pair
    pub fn lng_lat(&self) -> [Degree; 2] {
        [self.longitude, self.latitude]
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, COORDINATE_EPSILON)
    }
}

impl AbsDiffEq for GeoPoint {
    type Epsilon = Degree;

    fn default_epsilon() -> Self::Epsilon {
        COORDINATE_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.latitude.abs_diff_eq(&other.latitude, epsilon)
            && self.longitude.abs_diff_eq(&other.longitude, epsilon)
    }
}

impl RelativeEq for GeoPoint {
    fn default_max_relative() -> Self::Epsilon {
        Degree::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.latitude
            .relative_eq(&other.latitude, epsilon, max_relative)
            && self
                .longitude
                .relative_eq(&other.longitude, epsilon, max_relative)
    }
}

impl From<GeoPoint> for geo::Point {
    fn from(value: GeoPoint) -> Self {
        geo::Point::new(value.longitude, value.latitude)
    }
}

impl From<GeoPoint> for geo::Coord {
    fn from(value: GeoPoint) -> Self {
        geo::Coord {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<geo::Point> for GeoPoint {
    fn from(value: geo::Point) -> Self {
        GeoPoint::new(value.y(), value.x())
    }
}

impl From<geo::Coord> for GeoPoint {
    fn from(value: geo::Coord) -> Self {
        GeoPoint::new(value.y, value.x)
    }
}

impl Debug for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.longitude, self.latitude)
    }
}
