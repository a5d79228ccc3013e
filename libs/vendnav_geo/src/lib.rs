#![doc = include_str!("../docs/geo.md")]

pub mod bounds;
#[doc(hidden)]
pub mod coord;
pub mod distance;
#[doc(hidden)]
pub mod error;
pub mod heading;


#[doc(inline)]
pub use bounds::Bounds;
#[doc(inline)]
pub use coord::point::{Degree, GeoPoint};
#[doc(inline)]
pub use distance::{Equirectangular, estimate_distance};
#[doc(inline)]
pub use error::GeoError;
