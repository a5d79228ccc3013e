use serde::Deserialize;
use strum::{EnumIter, EnumString};
use vendnav_geo::GeoPoint;

use crate::route::Direction;

/// The qualifier of a maneuver, describing which way to turn.
///
/// Parses both the routing service's spelling (`"slight left"`) and the
/// underscored form (`"slight_left"`). Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, EnumIter, strum::Display)]
pub enum Modifier {
    #[strum(to_string = "left")]
    Left,
    #[strum(to_string = "right")]
    Right,
    #[strum(to_string = "slight_left", serialize = "slight left")]
    SlightLeft,
    #[strum(to_string = "slight_right", serialize = "slight right")]
    SlightRight,
    #[strum(to_string = "sharp_left", serialize = "sharp left")]
    SharpLeft,
    #[strum(to_string = "sharp_right", serialize = "sharp right")]
    SharpRight,
    #[strum(to_string = "straight")]
    Straight,
    #[strum(to_string = "arrive")]
    Arrive,
    #[default]
    #[strum(to_string = "none")]
    None,
}

impl Modifier {
    /// Reads a modifier, treating anything unrecognised as [`Modifier::None`].
    pub fn parse(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// The maneuver performed at the start of a [`RouteStep`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Maneuver {
    pub location: Option<GeoPoint>,
    pub bearing_before: Option<f64>,
    pub bearing_after: Option<f64>,
    pub modifier: Modifier,
    /// Set when the maneuver type is `arrive`.
    pub arrive: bool,
    pub instruction: String,
}

/// A single step of a walking route, in travel order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "RawStep")]
pub struct RouteStep {
    pub maneuver: Maneuver,
    /// Length of the step in metres.
    pub distance: Option<f64>,
}

impl RouteStep {
    pub fn new(maneuver: Maneuver) -> Self {
        Self {
            maneuver,
            distance: None,
        }
    }

    pub fn with_distance(self, distance: f64) -> Self {
        Self {
            distance: Some(distance),
            ..self
        }
    }

    /// The camera bearing to use when arriving at this step travelling in
    /// `direction`: the bearing after the maneuver when moving forward,
    /// the bearing before it when moving back.
    pub fn bearing(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Next => self.maneuver.bearing_after,
            Direction::Prev => self.maneuver.bearing_before,
        }
        .unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
struct RawManeuver {
    location: Option<[f64; 2]>,
    bearing_before: Option<f64>,
    bearing_after: Option<f64>,
    modifier: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    instruction: String,
}

#[derive(Deserialize)]
struct RawStep {
    maneuver: Option<RawManeuver>,
    distance: Option<f64>,
}

impl From<RawManeuver> for Maneuver {
    fn from(raw: RawManeuver) -> Self {
        Maneuver {
            location: raw.location.map(GeoPoint::from_lng_lat),
            bearing_before: raw.bearing_before,
            bearing_after: raw.bearing_after,
            modifier: raw.modifier.as_deref().map(Modifier::parse).unwrap_or_default(),
            arrive: raw.kind.as_deref() == Some("arrive"),
            instruction: raw.instruction,
        }
    }
}

impl From<RawStep> for RouteStep {
    fn from(raw: RawStep) -> Self {
        RouteStep {
            maneuver: raw.maneuver.map(Maneuver::from).unwrap_or_default(),
            distance: raw.distance,
        }
    }
}
