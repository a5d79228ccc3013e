use log::debug;
use serde::Serialize;
use strum::IntoEnumIterator;
use vendnav_geo::{GeoError, GeoPoint, heading};

use crate::pano::{PanoLink, Turn, resolve_best_link, sort_links};

/// A request to move the panorama, issued to the panorama service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanoMove {
    pub pano: String,
    pub heading: f64,
    pub pitch: f64,
}

impl PanoMove {
    /// Moves onto the panorama behind `link`, facing along it at eye level.
    pub fn follow(link: &PanoLink) -> Self {
        PanoMove {
            pano: link.pano.clone(),
            heading: link.heading,
            pitch: 0.0,
        }
    }
}

/// The panorama currently on screen, its view heading and the links
/// leading away from it, ordered by closeness to the heading.
#[derive(Debug, Clone, PartialEq)]
pub struct PanoramaView {
    pano: String,
    heading: f64,
    links: Vec<PanoLink>,
}

impl PanoramaView {
    pub fn new(
        pano: impl Into<String>,
        heading: f64,
        links: &[PanoLink],
    ) -> Result<Self, GeoError> {
        let heading = heading::checked(heading)?;

        Ok(PanoramaView {
            pano: pano.into(),
            links: sort_links(heading, links),
            heading,
        })
    }

    pub fn pano(&self) -> &str {
        &self.pano
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn links(&self) -> &[PanoLink] {
        &self.links
    }

    /// Takes in the state reported after the panorama or view changed.
    /// An empty link set keeps the previous links, as the service reports
    /// links lazily after a pano change.
    pub fn refresh(
        &mut self,
        pano: impl Into<String>,
        heading: f64,
        links: &[PanoLink],
    ) -> Result<(), GeoError> {
        self.heading = heading::checked(heading)?;
        self.pano = pano.into();

        let source = if links.is_empty() {
            std::mem::take(&mut self.links)
        } else {
            links.to_vec()
        };

        self.links = sort_links(self.heading, &source);
        Ok(())
    }

    /// Resolves the move for a relative turn. `None` leaves the view
    /// unchanged: either there are no links, or none lies within reach
    /// of the requested direction.
    pub fn turn(&self, turn: Turn) -> Option<PanoMove> {
        let target = turn.target_heading(self.heading);

        let Some(link) = resolve_best_link(target, &self.links) else {
            debug!("No link within reach of {target} from {}", self.pano);
            return None;
        };

        Some(PanoMove::follow(link))
    }

    /// The turns which would currently lead somewhere.
    pub fn available_turns(&self) -> Vec<Turn> {
        Turn::iter()
            .filter(|turn| self.turn(*turn).is_some())
            .collect()
    }

    /// Records a move issued through [`PanoramaView::turn`]. The link set
    /// belongs to the previous panorama and is cleared until refreshed.
    pub fn apply(&mut self, movement: &PanoMove) {
        self.pano.clone_from(&movement.pano);
        self.heading = heading::normalize(movement.heading);
        self.links.clear();
    }
}

/// The heading which looks from the panorama `position` at `target`.
pub fn look_at(position: GeoPoint, target: GeoPoint) -> f64 {
    heading::bearing(position, target)
}
