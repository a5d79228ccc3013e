use geo::{BoundingRect, LineString};
use log::debug;
use serde::Serialize;

use crate::GeoPoint;

/// An axis-aligned geographic rectangle, as consumed by a map's
/// fit-to-bounds call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl Bounds {
    /// Computes the smallest bounds enclosing every finite point given.
    /// Returns `None` when there is nothing to enclose.
    pub fn enclosing(points: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
        let (finite, skipped): (Vec<_>, Vec<_>) =
            points.into_iter().partition(GeoPoint::is_finite);

        if !skipped.is_empty() {
            debug!("Skipped {} non-finite points when bounding", skipped.len());
        }

        let line = finite.into_iter().map(geo::Coord::from).collect::<LineString>();
        line.bounding_rect().map(|rect| Bounds {
            south_west: GeoPoint::from(rect.min()),
            north_east: GeoPoint::from(rect.max()),
        })
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
        )
    }

    /// Returns the `[[lng, lat], [lng, lat]]` corner pairs.
    pub fn lng_lat(&self) -> [[f64; 2]; 2] {
        [self.south_west.lng_lat(), self.north_east.lng_lat()]
    }
}
