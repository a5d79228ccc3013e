use log::debug;
use serde::Serialize;
use strum::EnumString;
use vendnav_geo::GeoPoint;

use crate::route::{Icon, RouteStep, strip_markup};

/// Zoom level the camera flies to when presenting a step.
pub const STEP_ZOOM: f64 = 19.0;
/// Camera pitch, in degrees, when presenting a step.
pub const STEP_PITCH: f64 = 60.0;
/// Length of the camera flight between steps.
pub const STEP_FLIGHT_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

/// Position within an ordered list of [`RouteStep`]s.
///
/// A cursor is created when a route starts and discarded when a new
/// route is requested. For a non-empty route, `current_index` always
/// lies within `0..=len-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationCursor {
    pub current_index: usize,
}

impl NavigationCursor {
    pub fn start() -> Self {
        Self::default()
    }

    /// Moves one step in `direction`, clamped to the ends of `steps`.
    /// An empty route leaves the cursor unchanged.
    ///
    /// ```rust
    /// use vendnav::route::{Direction, NavigationCursor, RouteStep};
    ///
    /// let steps = vec![RouteStep::default(); 3];
    /// let cursor = NavigationCursor { current_index: 2 };
    ///
    /// assert_eq!(cursor.advance(Direction::Next, &steps), cursor);
    /// assert_eq!(cursor.advance(Direction::Prev, &steps).current_index, 1);
    /// ```
    #[must_use]
    pub fn advance(self, direction: Direction, steps: &[RouteStep]) -> Self {
        let Some(last) = steps.len().checked_sub(1) else {
            return self;
        };

        let index = match direction {
            Direction::Next => self.current_index.saturating_add(1),
            Direction::Prev => self.current_index.saturating_sub(1),
        };

        NavigationCursor {
            current_index: index.min(last),
        }
    }

    pub fn step<'a>(&self, steps: &'a [RouteStep]) -> Option<&'a RouteStep> {
        steps.get(self.current_index)
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    /// Whether there is no further step to advance to. Always true for
    /// an empty route.
    pub fn is_last(&self, steps: &[RouteStep]) -> bool {
        self.current_index + 1 >= steps.len()
    }
}

/// The instruction displayed for the current step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    pub icon: Icon,
    pub text: String,
    /// Step length rounded to whole metres, halves rounding up. Absent
    /// when the step has no usable length or a length of exactly zero.
    pub distance: Option<i64>,
}

impl From<&RouteStep> for Instruction {
    fn from(step: &RouteStep) -> Self {
        Instruction {
            icon: Icon::for_maneuver(&step.maneuver),
            text: strip_markup(&step.maneuver.instruction).into_owned(),
            distance: step
                .distance
                .filter(|distance| *distance != 0.0 && !distance.is_nan())
                .map(|distance| (distance + 0.5).floor() as i64),
        }
    }
}

/// A camera flight towards a step's maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub center: GeoPoint,
    pub bearing: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub duration_ms: u64,
}

impl Camera {
    pub fn fly_to(center: GeoPoint, bearing: f64) -> Self {
        Camera {
            center,
            bearing,
            zoom: STEP_ZOOM,
            pitch: STEP_PITCH,
            duration_ms: STEP_FLIGHT_MS,
        }
    }
}

/// The outcome of moving through a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub cursor: NavigationCursor,
    /// Absent only when the route has no steps.
    pub instruction: Option<Instruction>,
    /// Absent when the step has no positionable location, in which case
    /// the caller leaves the camera where it is.
    pub camera: Option<Camera>,
}

impl Navigation {
    pub fn is_positionable(&self) -> bool {
        self.camera.is_some()
    }
}

/// Advances `cursor` through `steps` and derives what the caller should
/// show: the instruction for the new step and where to point the camera.
pub fn navigate(direction: Direction, steps: &[RouteStep], cursor: NavigationCursor) -> Navigation {
    let cursor = cursor.advance(direction, steps);

    let Some(step) = cursor.step(steps) else {
        return Navigation {
            cursor,
            instruction: None,
            camera: None,
        };
    };

    let camera = step
        .maneuver
        .location
        .map(|center| Camera::fly_to(center, step.bearing(direction)));

    if camera.is_none() {
        debug!(
            "Step {} has no positionable location, skipping camera",
            cursor.current_index
        );
    }

    Navigation {
        cursor,
        instruction: Some(Instruction::from(step)),
        camera,
    }
}
