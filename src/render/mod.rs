//! Map layer descriptors for a walking route.
//!
//! [`RouteLayers`] is plain data computed from a route; [`sync`] pushes
//! it into any rendering SDK that implements [`MapSurface`].

mod geojson;
mod layer;
mod surface;
#[cfg(test)]
mod test;

pub use geojson::{Feature, FeatureCollection, GeoJson, Geometry};
pub use layer::*;
pub use surface::{MapSurface, sync};
