use serde::{Deserialize, Serialize};
use strum::EnumString;
use vendnav_geo::heading::{QUARTER_TURN, normalize, rotate};

/// A neighbouring panorama reachable from the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanoLink {
    /// Heading towards the linked panorama, in `[0, 360)`.
    pub heading: f64,
    pub pano: String,
}

impl PanoLink {
    pub fn new(heading: f64, pano: impl Into<String>) -> Self {
        Self {
            heading,
            pano: pano.into(),
        }
    }
}

/// A turn relative to the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Turn {
    Forward,
    Left,
    Right,
}

impl Turn {
    /// The absolute heading this turn aims for when facing `current`.
    ///
    /// ```rust
    /// use vendnav::pano::Turn;
    ///
    /// assert_eq!(Turn::Left.target_heading(10.0), 280.0);
    /// assert_eq!(Turn::Right.target_heading(10.0), 100.0);
    /// ```
    pub fn target_heading(self, current: f64) -> f64 {
        match self {
            Turn::Forward => normalize(current),
            Turn::Left => rotate(current, -QUARTER_TURN),
            Turn::Right => rotate(current, QUARTER_TURN),
        }
    }
}
