use std::borrow::Cow;
use std::sync::LazyLock;

use geo::LineString;
use regex::Regex;
use serde::Deserialize;
use vendnav_geo::{Bounds, GeoPoint};

use crate::Error;
use crate::route::{Instruction, NavigationCursor, RouteStep};

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]+>").expect("markup pattern must compile"));

/// Removes HTML tags from instruction text.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    MARKUP.replace_all(text, "")
}

#[derive(Deserialize)]
struct RouteResponse {
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Deserialize)]
struct RawRoute {
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    legs: Vec<RawLeg>,
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize)]
struct RawLeg {
    #[serde(default)]
    steps: Vec<RouteStep>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}

/// The first route of a walking directions response.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Total length in metres.
    pub distance: f64,
    /// Expected duration in seconds.
    pub duration: f64,
    /// Steps of the first leg, in travel order.
    pub steps: Vec<RouteStep>,
    /// The full route geometry, as `(lng, lat)` coordinates.
    pub geometry: LineString,
}

impl RouteSummary {
    fn from_response(response: RouteResponse) -> Result<Self, Error> {
        let route = response.routes.into_iter().next().ok_or(Error::NoRoute)?;

        let steps = route
            .legs
            .into_iter()
            .next()
            .map(|leg| leg.steps)
            .unwrap_or_default();

        let geometry = route
            .geometry
            .map(|geometry| {
                geometry
                    .coordinates
                    .into_iter()
                    .map(|[x, y]| geo::Coord { x, y })
                    .collect::<LineString>()
            })
            .unwrap_or_else(|| LineString::new(Vec::new()));

        Ok(RouteSummary {
            distance: route.distance,
            duration: route.duration,
            steps,
            geometry,
        })
    }

    pub fn from_json(payload: &str) -> Result<Self, Error> {
        let response: RouteResponse = serde_json::from_str(payload)?;
        RouteSummary::from_response(response)
    }

    /// A fresh cursor at the first step, and that step's instruction.
    pub fn start(&self) -> (NavigationCursor, Option<Instruction>) {
        let cursor = NavigationCursor::start();
        (cursor, cursor.step(&self.steps).map(Instruction::from))
    }

    pub fn path(&self) -> Vec<GeoPoint> {
        self.geometry.coords().copied().map(GeoPoint::from).collect()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.path())
    }
}
