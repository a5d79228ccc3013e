//! Vending machine locations and their proximity ranking.

mod candidate;
mod nearest;
#[cfg(test)]
mod test;

pub use candidate::{Candidate, CoordinateRecord, CoordinatesPayload};
pub use nearest::{Nearest, Proximity, select_nearest};
