//! Walking routes and turn-by-turn stepping through them.

mod icon;
mod navigator;
mod step;
mod summary;

pub use icon::Icon;
pub use navigator::{
    Camera, Direction, Instruction, Navigation, NavigationCursor, STEP_FLIGHT_MS, STEP_PITCH,
    STEP_ZOOM, navigate,
};
pub use step::{Maneuver, Modifier, RouteStep};
pub use summary::{RouteSummary, strip_markup};
