use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::route::{Maneuver, Modifier};

/// The glyph shown beside a turn-by-turn instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Left,
    Right,
    SlightLeft,
    SlightRight,
    SharpLeft,
    SharpRight,
    /// Shown for any maneuver without a recognised turn.
    Continue,
    Arrive,
}

impl Icon {
    /// Derives the icon for a maneuver.
    ///
    /// Arrival takes precedence over every modifier, so arriving
    /// "on the right" still shows the finish flag.
    pub fn for_maneuver(maneuver: &Maneuver) -> Self {
        if maneuver.arrive {
            return Icon::Arrive;
        }

        match maneuver.modifier {
            Modifier::Left => Icon::Left,
            Modifier::Right => Icon::Right,
            Modifier::SlightLeft => Icon::SlightLeft,
            Modifier::SlightRight => Icon::SlightRight,
            Modifier::SharpLeft => Icon::SharpLeft,
            Modifier::SharpRight => Icon::SharpRight,
            Modifier::Arrive => Icon::Arrive,
            Modifier::Straight | Modifier::None => Icon::Continue,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Left => "←",
            Icon::Right | Icon::Continue => "→",
            Icon::SlightLeft => "↖",
            Icon::SlightRight => "↗",
            Icon::SharpLeft => "↰",
            Icon::SharpRight => "↱",
            Icon::Arrive => "🏁",
        }
    }
}

impl Display for Icon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}
