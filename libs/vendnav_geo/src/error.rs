use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    InvalidCoordinate(String),
    InvalidHeading(f64),
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::InvalidCoordinate(reason) => write!(f, "invalid coordinate: {reason}"),
            GeoError::InvalidHeading(heading) => write!(f, "invalid heading: {heading}"),
        }
    }
}

impl std::error::Error for GeoError {}
