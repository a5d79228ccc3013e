use geo::Distance;
use itertools::Itertools;
use log::warn;
use vendnav_geo::{Equirectangular, GeoPoint};

#[cfg(feature = "tracing")]
use tracing::Level;

use crate::machine::Candidate;

/// A candidate paired with its estimated distance from the origin, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub candidate: &'a Candidate,
    pub distance: f64,
}

/// Ranks a collection of machines by their distance to a moving origin.
///
/// Results are recomputed on every call. Candidates with non-finite
/// coordinates never take part in ranking.
pub trait Proximity {
    /// Returns the candidate with the strictly smallest distance to
    /// `origin`. Ties resolve to whichever came first. `None` when no
    /// candidate has a usable location.
    fn nearest(&self, origin: &GeoPoint) -> Option<Nearest<'_>>;

    /// Every rankable candidate, ordered by ascending distance.
    /// Equidistant candidates keep their relative order.
    fn ranked(&self, origin: &GeoPoint) -> Vec<Nearest<'_>>;
}

impl Proximity for [Candidate] {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn nearest(&self, origin: &GeoPoint) -> Option<Nearest<'_>> {
        measured(self, *origin).min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn ranked(&self, origin: &GeoPoint) -> Vec<Nearest<'_>> {
        measured(self, *origin)
            .sorted_by(|a, b| a.distance.total_cmp(&b.distance))
            .collect()
    }
}

fn measured(candidates: &[Candidate], origin: GeoPoint) -> impl Iterator<Item = Nearest<'_>> {
    if !origin.is_finite() {
        warn!("Cannot rank machines from non-finite origin {origin:?}");
    }

    candidates
        .iter()
        .filter(|candidate| candidate.is_valid())
        .map(move |candidate| Nearest {
            candidate,
            distance: Equirectangular.distance(origin, candidate.location),
        })
        .filter(|nearest| !nearest.distance.is_nan())
}

/// Selects the machine nearest to `origin`, or `None` when no candidate
/// has a usable location.
///
/// ```rust
/// use vendnav::machine::{Candidate, select_nearest};
/// use vendnav_geo::GeoPoint;
///
/// let origin = GeoPoint::new(33.6461, -117.8427);
/// let machines = vec![
///     Candidate::new("far", GeoPoint::new(33.6502, -117.8391)),
///     Candidate::new("near", GeoPoint::new(33.6470, -117.8410)),
/// ];
///
/// let nearest = select_nearest(&origin, &machines).expect("a machine is in range");
/// assert_eq!(nearest.id.as_str(), "near");
/// ```
pub fn select_nearest<'a>(origin: &GeoPoint, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
    candidates.nearest(origin).map(|nearest| nearest.candidate)
}
