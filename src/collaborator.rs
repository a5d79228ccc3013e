//! Contracts of the services this crate is driven by. Transport and
//! rendering stay with the host; these traits only describe what is
//! read from and requested of them.

use log::debug;
use vendnav_geo::GeoPoint;

use crate::Error;
use crate::ident::MachineId;
use crate::inventory::Inventory;
use crate::machine::Candidate;
use crate::pano::{PanoLink, PanoMove, Turn, resolve_best_link};
use crate::route::RouteSummary;

/// Supplies the known vending machine locations.
pub trait CoordinateSource {
    fn candidates(&self) -> Result<Vec<Candidate>, Error>;
}

/// Supplies walking directions between two points.
pub trait RouteSource {
    fn walking_route(&self, origin: GeoPoint, destination: GeoPoint) -> Result<RouteSummary, Error>;
}

pub trait InventorySource {
    fn inventory(&self, machine: &MachineId) -> Result<Inventory, Error>;
}

/// A panorama found near a requested location.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPanorama {
    pub pano: String,
    /// Where the panorama was captured.
    pub position: GeoPoint,
    pub links: Vec<PanoLink>,
}

/// Looks up street-level panoramas.
pub trait PanoramaSource {
    /// The panorama closest to `location` within `radius` metres, if any.
    fn panorama_near(&self, location: GeoPoint, radius: f64)
    -> Result<Option<NearbyPanorama>, Error>;
}

/// A street-level panorama widget.
pub trait Panorama {
    fn heading(&self) -> f64;

    fn links(&self) -> Vec<PanoLink>;

    fn set_target(&mut self, movement: &PanoMove);
}

/// Moves `panorama` in the relative direction `turn`, following the
/// link closest to it. Returns the move issued, or `None` when no link
/// lies within reach.
pub fn drive<P>(panorama: &mut P, turn: Turn) -> Option<PanoMove>
where
    P: Panorama + ?Sized,
{
    let heading = panorama.heading();
    let links = panorama.links();
    let target = turn.target_heading(heading);

    let Some(link) = resolve_best_link(target, &links) else {
        debug!("Cannot turn {turn} from heading {heading}, no link near {target}");
        return None;
    };

    let movement = PanoMove::follow(link);

    panorama.set_target(&movement);
    Some(movement)
}
