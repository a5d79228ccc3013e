//! The state a map front-end threads between interactions: where the
//! user is, which machines are known, which one is selected, and the
//! route being walked towards it.

use log::{debug, info};
use serde::Serialize;
use strum::{Display, EnumString};
use vendnav_geo::GeoPoint;

use crate::Error;
use crate::collaborator::{CoordinateSource, InventorySource, PanoramaSource, RouteSource};
use crate::config::{Config, DEFAULT_LOCATION, DEFAULT_PANORAMA_RADIUS};
use crate::inventory::Inventory;
use crate::machine::{Candidate, Proximity};
use crate::pano::{PanoramaView, look_at};
use crate::render::RouteLayers;
use crate::route::{Direction, Instruction, Navigation, NavigationCursor, RouteSummary, navigate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
pub enum ViewMode {
    #[default]
    #[strum(serialize = "3d")]
    #[serde(rename = "3d")]
    ThreeD,
    #[strum(serialize = "2d")]
    #[serde(rename = "2d")]
    TwoD,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::ThreeD => ViewMode::TwoD,
            ViewMode::TwoD => ViewMode::ThreeD,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    user: GeoPoint,
    candidates: Vec<Candidate>,
    nearest: Option<(Candidate, f64)>,
    selected: Option<Candidate>,
    view_mode: ViewMode,
    route: Option<RouteSummary>,
    cursor: NavigationCursor,
    panorama_radius: f64,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(DEFAULT_LOCATION)
    }
}

impl Session {
    pub fn new(user: GeoPoint) -> Self {
        Session {
            user,
            candidates: vec![],
            nearest: None,
            selected: None,
            view_mode: ViewMode::default(),
            route: None,
            cursor: NavigationCursor::start(),
            panorama_radius: DEFAULT_PANORAMA_RADIUS,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Session {
            panorama_radius: config.panorama_radius,
            ..Session::new(config.default_location)
        }
    }

    pub fn user(&self) -> GeoPoint {
        self.user
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The machine nearest to the user and its distance in kilometres.
    pub fn nearest(&self) -> Option<(&Candidate, f64)> {
        self.nearest
            .as_ref()
            .map(|(candidate, distance)| (candidate, *distance))
    }

    pub fn selected(&self) -> Option<&Candidate> {
        self.selected.as_ref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn route(&self) -> Option<&RouteSummary> {
        self.route.as_ref()
    }

    pub fn cursor(&self) -> NavigationCursor {
        self.cursor
    }

    pub fn set_user_location(&mut self, user: GeoPoint) {
        self.user = user;
        self.recompute();
    }

    pub fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.nearest = self
            .candidates
            .nearest(&self.user)
            .map(|nearest| (nearest.candidate.clone(), nearest.distance));

        match &self.nearest {
            Some((candidate, distance)) => {
                debug!("Nearest machine is {} at {distance:.3} km", candidate.id)
            }
            None => debug!("No machine can be ranked from {:?}", self.user),
        }
    }

    /// Selects the nearest machine. Does nothing when there is none.
    pub fn show_directions(&mut self) -> Option<&Candidate> {
        let (nearest, _) = self.nearest.clone()?;
        self.select(nearest);
        self.selected.as_ref()
    }

    /// Selects `candidate`, dropping the route to any other machine.
    pub fn select(&mut self, candidate: Candidate) {
        if self.selected.as_ref() != Some(&candidate) {
            self.discard_route();
        }

        self.selected = Some(candidate);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.discard_route();
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.view_mode = self.view_mode.toggled();
        self.view_mode
    }

    /// Stores a fresh route and positions the cursor on its first step,
    /// returning that step's instruction.
    pub fn start_route(&mut self, route: RouteSummary) -> Option<Instruction> {
        let (cursor, instruction) = route.start();

        self.cursor = cursor;
        self.route = Some(route);
        instruction
    }

    /// Moves through the current route. `None` without a route.
    pub fn step(&mut self, direction: Direction) -> Option<Navigation> {
        let route = self.route.as_ref()?;
        let navigation = navigate(direction, &route.steps, self.cursor);

        self.cursor = navigation.cursor;
        Some(navigation)
    }

    /// Layers showing the current route to the selected machine.
    pub fn route_layers(&self) -> Option<RouteLayers> {
        let destination = self.selected.as_ref()?;
        let route = self.route.as_ref()?;

        Some(RouteLayers::from_summary(self.user, destination.location, route))
    }

    /// Replaces the known machines with those of `source`, returning how
    /// many were loaded.
    pub fn load<S>(&mut self, source: &S) -> Result<usize, Error>
    where
        S: CoordinateSource + ?Sized,
    {
        let candidates = source.candidates()?;
        info!("Loaded {} machine locations", candidates.len());

        self.set_candidates(candidates);
        Ok(self.candidates.len())
    }

    /// Requests walking directions from the user to the selected machine
    /// and starts them. `Ok(None)` when nothing is selected.
    pub fn request_route<R>(&mut self, router: &R) -> Result<Option<Instruction>, Error>
    where
        R: RouteSource + ?Sized,
    {
        let Some(destination) = self.selected.as_ref().map(|c| c.location) else {
            debug!("No machine selected, not requesting a route");
            return Ok(None);
        };

        let route = router.walking_route(self.user, destination)?;
        Ok(self.start_route(route))
    }

    /// Fetches the stock of the selected machine. `Ok(None)` when nothing
    /// is selected.
    pub fn inventory<S>(&self, source: &S) -> Result<Option<Inventory>, Error>
    where
        S: InventorySource + ?Sized,
    {
        let Some(machine) = self.selected.as_ref() else {
            return Ok(None);
        };

        source.inventory(&machine.id).map(Some)
    }

    /// Opens the panorama nearest to the selected machine, facing it.
    /// `Ok(None)` when nothing is selected or no panorama lies within the
    /// panorama radius.
    pub fn street_view<S>(&self, source: &S) -> Result<Option<PanoramaView>, Error>
    where
        S: PanoramaSource + ?Sized,
    {
        let Some(machine) = self.selected.as_ref() else {
            return Ok(None);
        };

        let Some(found) = source.panorama_near(machine.location, self.panorama_radius)? else {
            debug!(
                "No panorama within {} m of machine {}",
                self.panorama_radius, machine.id
            );
            return Ok(None);
        };

        let heading = look_at(found.position, machine.location);
        Ok(Some(PanoramaView::new(found.pano, heading, &found.links)?))
    }

    fn discard_route(&mut self) {
        self.route = None;
        self.cursor = NavigationCursor::start();
    }
}
